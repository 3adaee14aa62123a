use std::{cell::RefCell, rc::Rc};

use fluent::{FluentBundle, FluentResource};
use futures_channel::oneshot;
use gloo::utils::document;
use web_sys::{Element, HtmlDivElement};
use yew::prelude::*;

use console_sdk::state::I18nState;
use i18n::{en_us, ru_ru};
use utils::tr;

use crate::constant::CANCEL;

/// Yes/no confirmation, mounted on its own root like a native dialog.
pub struct ConfirmDialog {
    node: NodeRef,
    i18n: FluentBundle<FluentResource>,
}

pub enum ConfirmMsg {
    Answer(bool),
    OnKeyDown(KeyboardEvent),
}

#[derive(Properties, Clone, PartialEq)]
pub struct ConfirmProps {
    container: Element,
    pub title: AttrValue,
    pub text: AttrValue,
    /// falls back to the translated "Yes"
    #[prop_or_default]
    pub confirm_text: Option<AttrValue>,
    pub answer: Callback<bool>,
}

impl Component for ConfirmDialog {
    type Message = ConfirmMsg;
    type Properties = ConfirmProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let lang = I18nState::get().lang;
        Self {
            node: NodeRef::default(),
            i18n: utils::create_bundle(lang.pick(en_us::CONFIRM, ru_ru::CONFIRM)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ConfirmMsg::Answer(yes) => self.close(ctx, yes),
            ConfirmMsg::OnKeyDown(event) => {
                if event.key() == "Escape" {
                    self.close(ctx, false);
                }
                event.stop_propagation();
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let confirm_text = confirm_label(&self.i18n, props.confirm_text.as_ref());
        let onkeydown = ctx.link().callback(ConfirmMsg::OnKeyDown);
        html! {
            <div class="confirm-backdrop">
                <div tabindex="-1" class="confirm-dialog box-shadow" role="alertdialog" ref={self.node.clone()} {onkeydown}>
                    <div class="confirm-icon warning">{"!"}</div>
                    <h2 class="confirm-title">{&props.title}</h2>
                    <div class="confirm-text">{&props.text}</div>
                    <div class="confirm-actions">
                        <button type="button" class="btn btn-danger"
                            onclick={ctx.link().callback(|_| ConfirmMsg::Answer(true))}>
                            {confirm_text}
                        </button>
                        <button type="button" class="btn btn-secondary"
                            onclick={ctx.link().callback(|_| ConfirmMsg::Answer(false))}>
                            {tr!(self.i18n, CANCEL)}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(node) = self.node.cast::<HtmlDivElement>() {
                let _ = node.focus();
            }
        }
    }
}

/// the caller's confirm text, or the translated "Yes"
fn confirm_label(i18n: &FluentBundle<FluentResource>, custom: Option<&AttrValue>) -> AttrValue {
    custom
        .cloned()
        .unwrap_or_else(|| tr!(i18n, "yes").into())
}

impl ConfirmDialog {
    fn close(&mut self, ctx: &Context<Self>, yes: bool) {
        ctx.props().answer.emit(yes);
        ctx.props().container.remove();
    }

    fn container() -> Option<Element> {
        let container = document().create_element("div").ok()?;
        container.set_class_name("confirm-container");
        document().body()?.append_child(&container).ok()?;
        Some(container)
    }

    /// Shows the dialog and resolves to `true` only when the user confirms.
    pub async fn ask(
        title: impl Into<AttrValue>,
        text: impl Into<AttrValue>,
        confirm_text: Option<AttrValue>,
    ) -> bool {
        let Some(container) = Self::container() else {
            log::error!("could not mount the confirmation dialog");
            return false;
        };
        let (tx, rx) = oneshot::channel();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let answer = Callback::from(move |yes: bool| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(yes);
            }
        });
        let props = ConfirmProps {
            container: container.clone(),
            title: title.into(),
            text: text.into(),
            confirm_text,
            answer,
        };
        let app = yew::Renderer::<ConfirmDialog>::with_root_and_props(container, props).render();
        // a dropped sender means the dialog went away unanswered
        let yes = rx.await.unwrap_or(false);
        app.destroy();
        yes
    }
}

#[cfg(test)]
mod tests {
    use i18n::LanguageType;

    use super::*;

    fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
        utils::create_bundle(lang.pick(en_us::CONFIRM, ru_ru::CONFIRM))
    }

    #[test]
    fn confirm_defaults_to_yes() {
        assert_eq!(confirm_label(&bundle(LanguageType::EnUS), None).as_str(), "Yes");
    }

    #[test]
    fn custom_confirm_text_wins() {
        let custom = AttrValue::from("Yes, delete!");
        assert_eq!(
            confirm_label(&bundle(LanguageType::EnUS), Some(&custom)).as_str(),
            "Yes, delete!"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser {
    use futures_channel::oneshot;
    use gloo::timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// lets the scheduler run pending renders
    async fn tick() {
        let (tx, rx) = oneshot::channel();
        Timeout::new(0, move || {
            let _ = tx.send(());
        })
        .forget();
        let _ = rx.await;
    }

    fn click(selector: &str) {
        document()
            .query_selector(selector)
            .unwrap()
            .expect("button is rendered")
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn mounted() -> bool {
        document()
            .query_selector(".confirm-container")
            .unwrap()
            .is_some()
    }

    #[wasm_bindgen_test]
    async fn confirm_resolves_true_and_unmounts() {
        let (tx, rx) = oneshot::channel();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(ConfirmDialog::ask("Are you sure?", "gone", None).await);
        });
        tick().await;
        assert!(mounted());

        click(".confirm-actions .btn-danger");
        assert!(rx.await.unwrap());
        tick().await;
        assert!(!mounted());
    }

    #[wasm_bindgen_test]
    async fn cancel_resolves_false() {
        let (tx, rx) = oneshot::channel();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(ConfirmDialog::ask("Are you sure?", "kept", None).await);
        });
        tick().await;

        click(".confirm-actions .btn-secondary");
        assert!(!rx.await.unwrap());
        tick().await;
        assert!(!mounted());
    }
}
