use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use console_sdk::model::role::Role;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

use crate::constant::{DELETE, ID, NO_ROLES};
use crate::input_value;
use crate::loading::LoadingButton;

/// Role catalogue with an add form.
pub struct RolesPanel {
    name_node: NodeRef,
    i18n: FluentBundle<FluentResource>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct RolesPanelProps {
    pub roles: Vec<Role>,
    pub saving: bool,
    /// bumped by the owner each time a role is created, clears the name input
    #[prop_or_default]
    pub created: u32,
    pub on_create: Callback<String>,
    pub on_delete: Callback<i64>,
    pub lang: LanguageType,
}

pub enum RolesPanelMsg {
    Submit(SubmitEvent),
}

/// the typed name is kept until the owner reports a successful create
fn was_created(old: &RolesPanelProps, new: &RolesPanelProps) -> bool {
    new.created != old.created
}

fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(lang.pick(en_us::ROLES, ru_ru::ROLES))
}

impl Component for RolesPanel {
    type Message = RolesPanelMsg;
    type Properties = RolesPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            name_node: NodeRef::default(),
            i18n: bundle(ctx.props().lang),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().lang != old_props.lang {
            self.i18n = bundle(ctx.props().lang);
        }
        if was_created(old_props, ctx.props()) {
            if let Some(input) = self.name_node.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RolesPanelMsg::Submit(event) => {
                event.prevent_default();
                if ctx.props().saving {
                    return false;
                }
                ctx.props().on_create.emit(input_value(&self.name_node));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let rows = if props.roles.is_empty() {
            html! {
                <tr><td colspan="4" class="text-center">{tr!(self.i18n, NO_ROLES)}</td></tr>
            }
        } else {
            props
                .roles
                .iter()
                .map(|role| {
                    let id = role.id;
                    let onclick = props.on_delete.reform(move |_: MouseEvent| id);
                    html! {
                        <tr key={id.to_string()}>
                            <td>{id.to_string()}</td>
                            <td>{&role.name}</td>
                            <td>{role.description.clone().unwrap_or_default()}</td>
                            <td>
                                <button type="button" class="btn btn-danger btn-sm" {onclick}>
                                    <i class="bi bi-trash"></i>{" "}{tr!(self.i18n, DELETE)}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Html>()
        };

        html! {
            <div class="roles-panel">
                <form class="row g-2 mb-3" onsubmit={ctx.link().callback(RolesPanelMsg::Submit)}>
                    <div class="col-auto">
                        <input ref={self.name_node.clone()}
                            type="text"
                            id="new-role-name"
                            class="form-control"
                            required={true}
                            placeholder={tr!(self.i18n, "new_role")} />
                    </div>
                    <div class="col-auto">
                        <LoadingButton id="addRoleBtn" label={tr!(self.i18n, "add")} loading={props.saving} />
                    </div>
                </form>
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <th>{tr!(self.i18n, ID)}</th>
                            <th>{tr!(self.i18n, "name")}</th>
                            <th>{tr!(self.i18n, "description")}</th>
                            <th>{tr!(self.i18n, DELETE)}</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(created: u32, roles: Vec<Role>) -> RolesPanelProps {
        RolesPanelProps {
            roles,
            saving: false,
            created,
            on_create: Callback::noop(),
            on_delete: Callback::noop(),
            lang: LanguageType::EnUS,
        }
    }

    #[test]
    fn input_survives_a_failed_create() {
        // a failed create leaves the counter alone
        assert!(!was_created(&props(2, vec![]), &props(2, vec![])));
    }

    #[test]
    fn input_clears_after_a_successful_create() {
        let role = Role {
            id: 3,
            name: "MANAGER".into(),
            description: None,
        };
        assert!(was_created(&props(2, vec![]), &props(3, vec![role])));
    }

    #[test]
    fn deleting_a_role_keeps_the_input() {
        let role = Role {
            id: 3,
            name: "MANAGER".into(),
            description: None,
        };
        assert!(!was_created(&props(3, vec![role]), &props(3, vec![])));
    }
}
