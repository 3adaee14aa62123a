use web_sys::HtmlInputElement;
use yew::NodeRef;

pub mod constant;
pub mod dialog;
pub mod loading;
pub mod modal;
pub mod navbar;
pub mod notification;
pub mod profile_card;
pub mod profile_form;
pub mod roles_panel;
pub mod user_form;
pub mod users_table;

/// current value of the input behind `node`, empty when it is not mounted
pub(crate) fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}
