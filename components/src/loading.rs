use yew::prelude::*;

use crate::constant::{HIDDEN, SPINNER};

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingButtonProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub loading: bool,
    #[prop_or(AttrValue::Static("btn btn-primary"))]
    pub class: AttrValue,
    #[prop_or(AttrValue::Static("submit"))]
    pub type_: AttrValue,
}

/// Submit button that is disabled and shows a spinner while `loading`.
#[function_component(LoadingButton)]
pub fn loading_button(props: &LoadingButtonProps) -> Html {
    let spinner = classes!(SPINNER, (!props.loading).then_some(HIDDEN));
    html! {
        <button id={props.id.clone()}
            type={props.type_.clone()}
            class={props.class.clone()}
            disabled={props.loading}>
            <span class={spinner} role="status" aria-hidden="true"></span>
            {" "}{&props.label}
        </button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TableLoadingProps {
    pub loading: bool,
    pub label: AttrValue,
}

/// Spinner row shown over a table while its rows are being fetched.
#[function_component(TableLoading)]
pub fn table_loading(props: &TableLoadingProps) -> Html {
    let class = classes!("table-loading", "text-center", (!props.loading).then_some(HIDDEN));
    html! {
        <div id="tableLoading" {class}>
            <div class="spinner-border" role="status">
                <span class="visually-hidden">{&props.label}</span>
            </div>
        </div>
    }
}
