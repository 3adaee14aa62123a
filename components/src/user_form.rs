use fluent::{FluentBundle, FluentResource};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

use console_sdk::model::role::Role;
use console_sdk::model::user::UserFormData;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

use crate::constant::{AGE, CLOSE, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, ROLE, SAVE};
use crate::input_value;
use crate::loading::LoadingButton;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    /// element id prefix, `add-` or `edit-`
    fn prefix(&self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit => "edit",
        }
    }
}

/// Add/edit user form. Mounted fresh each time its modal opens,
/// so the initial values double as the reset state.
pub struct UserForm {
    first_name_node: NodeRef,
    last_name_node: NodeRef,
    age_node: NodeRef,
    email_node: NodeRef,
    pwd_node: NodeRef,
    roles_node: NodeRef,
    i18n: FluentBundle<FluentResource>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct UserFormProps {
    pub mode: FormMode,
    #[prop_or_default]
    pub initial: UserFormData,
    pub roles: Vec<Role>,
    pub loading: bool,
    pub submit: Callback<UserFormData>,
    pub close: Callback<()>,
    pub lang: LanguageType,
}

pub enum UserFormMsg {
    Submit(SubmitEvent),
}

fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(lang.pick(en_us::USER_FORM, ru_ru::USER_FORM))
}

impl Component for UserForm {
    type Message = UserFormMsg;
    type Properties = UserFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            first_name_node: NodeRef::default(),
            last_name_node: NodeRef::default(),
            age_node: NodeRef::default(),
            email_node: NodeRef::default(),
            pwd_node: NodeRef::default(),
            roles_node: NodeRef::default(),
            i18n: bundle(ctx.props().lang),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().lang != old_props.lang {
            self.i18n = bundle(ctx.props().lang);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UserFormMsg::Submit(event) => {
                event.prevent_default();
                if ctx.props().loading {
                    return false;
                }
                let data = UserFormData {
                    id: ctx.props().initial.id,
                    first_name: input_value(&self.first_name_node),
                    last_name: input_value(&self.last_name_node),
                    age: input_value(&self.age_node),
                    email: input_value(&self.email_node),
                    password: input_value(&self.pwd_node),
                    role_ids: selected_values(&self.roles_node),
                };
                log::debug!(
                    "{:?} user form submitted, roles: {:?}",
                    ctx.props().mode,
                    data.role_ids
                );
                ctx.props().submit.emit(data);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let initial = &props.initial;
        let prefix = props.mode.prefix();
        let field_id = |name: &str| format!("{}-{}", prefix, name);

        let options = props
            .roles
            .iter()
            .map(|role| {
                let value = role.option_value();
                let selected = initial.role_ids.contains(&value);
                html! {
                    <option key={value.clone()} {value} {selected}>{&role.name}</option>
                }
            })
            .collect::<Html>();

        let (form_id, button_id, button_label, pwd_required, pwd_hint) = match props.mode {
            FormMode::Add => (
                "addUserForm",
                "addUserBtn",
                tr!(self.i18n, "add_user"),
                true,
                html!(),
            ),
            FormMode::Edit => (
                "editUserForm",
                "editUserBtn",
                tr!(self.i18n, SAVE),
                false,
                html!(<div class="form-text">{tr!(self.i18n, "password_keep")}</div>),
            ),
        };
        let id_field = match (props.mode, initial.id) {
            (FormMode::Edit, Some(id)) => html! {
                <div class="mb-3">
                    <label for="edit-id" class="form-label fw-bold">{"ID"}</label>
                    <input type="text" id="edit-id" name="id" class="form-control" value={id.to_string()} readonly={true} />
                </div>
            },
            _ => html!(),
        };
        let on_cancel = props.close.reform(|_: MouseEvent| ());

        html! {
            <form id={form_id} onsubmit={ctx.link().callback(UserFormMsg::Submit)}>
                <div class="modal-body text-center">
                    {id_field}
                    <div class="mb-3">
                        <label for={field_id("firstName")} class="form-label fw-bold">{tr!(self.i18n, FIRST_NAME)}</label>
                        <input ref={self.first_name_node.clone()}
                            type="text"
                            id={field_id("firstName")}
                            name="firstName"
                            class="form-control"
                            required={true}
                            value={initial.first_name.clone()} />
                    </div>
                    <div class="mb-3">
                        <label for={field_id("lastName")} class="form-label fw-bold">{tr!(self.i18n, LAST_NAME)}</label>
                        <input ref={self.last_name_node.clone()}
                            type="text"
                            id={field_id("lastName")}
                            name="lastName"
                            class="form-control"
                            required={true}
                            value={initial.last_name.clone()} />
                    </div>
                    <div class="mb-3">
                        <label for={field_id("age")} class="form-label fw-bold">{tr!(self.i18n, AGE)}</label>
                        <input ref={self.age_node.clone()}
                            type="number"
                            min="0"
                            id={field_id("age")}
                            name="age"
                            class="form-control"
                            required={true}
                            value={initial.age.clone()} />
                    </div>
                    <div class="mb-3">
                        <label for={field_id("email")} class="form-label fw-bold">{tr!(self.i18n, EMAIL)}</label>
                        <input ref={self.email_node.clone()}
                            type="email"
                            id={field_id("email")}
                            name="email"
                            class="form-control"
                            required={true}
                            autocomplete="email"
                            value={initial.email.clone()} />
                    </div>
                    <div class="mb-3">
                        <label for={field_id("password")} class="form-label fw-bold">{tr!(self.i18n, PASSWORD)}</label>
                        <input ref={self.pwd_node.clone()}
                            type="password"
                            id={field_id("password")}
                            name="password"
                            class="form-control"
                            required={pwd_required}
                            autocomplete="new-password" />
                        {pwd_hint}
                    </div>
                    <div class="mb-3">
                        <label for={field_id("roles")} class="form-label fw-bold">{tr!(self.i18n, ROLE)}</label>
                        <select ref={self.roles_node.clone()}
                            id={field_id("roles")}
                            name="roleIds"
                            class="form-select"
                            multiple={true}
                            size="2">
                            {options}
                        </select>
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>{tr!(self.i18n, CLOSE)}</button>
                    <LoadingButton id={button_id} label={button_label} loading={props.loading} />
                </div>
            </form>
        }
    }
}

/// values of every selected `<option>` of a multi-select
fn selected_values(node: &NodeRef) -> Vec<String> {
    let Some(select) = node.cast::<HtmlSelectElement>() else {
        return Vec::new();
    };
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}
