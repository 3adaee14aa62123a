use web_sys::HtmlDivElement;
use yew::prelude::*;

/// Dialog frame used by the add/edit forms. Escape or a backdrop click closes it.
pub struct Modal {
    node: NodeRef,
}

pub enum ModalMsg {
    OnEscDown(KeyboardEvent),
    BackdropClick(MouseEvent),
}

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub close_label: AttrValue,
    pub close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ModalMsg;
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ModalMsg::OnEscDown(event) => {
                if event.key() == "Escape" {
                    ctx.props().close.emit(());
                }
                event.stop_propagation();
            }
            ModalMsg::BackdropClick(event) => {
                // only clicks on the backdrop itself, not bubbling from the dialog
                let target = event.target_dyn_into::<HtmlDivElement>();
                let backdrop = self.node.cast::<HtmlDivElement>();
                if target.is_some() && target == backdrop {
                    ctx.props().close.emit(());
                }
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onclose = props.close.reform(|_: MouseEvent| ());
        html! {
            <div id={props.id.clone()}
                class="modal fade show d-block"
                tabindex="-1"
                role="dialog"
                ref={self.node.clone()}
                onkeydown={ctx.link().callback(ModalMsg::OnEscDown)}
                onclick={ctx.link().callback(ModalMsg::BackdropClick)}>
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{&props.title}</h5>
                            <button type="button" class="btn-close" aria-label={props.close_label.clone()} onclick={onclose}></button>
                        </div>
                        {props.children.clone()}
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
