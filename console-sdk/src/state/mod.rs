use serde::{Deserialize, Serialize};
use yewdux::Store;

use i18n::LanguageType;

/// language type
#[derive(Debug, Default, Clone, PartialEq, Store, Serialize, Deserialize)]
#[store(storage = "local")]
pub struct I18nState {
    pub lang: LanguageType,
}

impl I18nState {
    pub fn get() -> std::rc::Rc<I18nState> {
        yewdux::Dispatch::<I18nState>::global().get()
    }
}
