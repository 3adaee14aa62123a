use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;

use console_sdk::model::user::User;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

use crate::constant::{AGE, EMAIL, FIRST_NAME, ID, LAST_NAME, NO_ROLES, ROLE};

/// `[ADMIN] [USER]`, or the "no roles" text for a user without any
fn roles_label(i18n: &FluentBundle<FluentResource>, user: &User) -> String {
    if user.roles.is_empty() {
        tr!(i18n, NO_ROLES)
    } else {
        user.roles_bracketed()
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub user: Option<User>,
    pub lang: LanguageType,
    pub on_edit: Callback<()>,
}

/// Read-only view of the signed-in user's record.
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let i18n = utils::create_bundle(props.lang.pick(en_us::PROFILE, ru_ru::PROFILE));
    let user = props.user.clone().unwrap_or_default();
    let roles = roles_label(&i18n, &user);
    let id = props
        .user
        .as_ref()
        .map(|user| user.id.to_string())
        .unwrap_or_default();
    let onclick = props.on_edit.reform(|_: MouseEvent| ());

    html! {
        <div class="card">
            <div class="card-header fw-bold">{tr!(i18n, "about_user")}</div>
            <div class="card-body">
                <table class="table table-striped">
                    <thead>
                        <tr>
                            <th>{tr!(i18n, ID)}</th>
                            <th>{tr!(i18n, FIRST_NAME)}</th>
                            <th>{tr!(i18n, LAST_NAME)}</th>
                            <th>{tr!(i18n, AGE)}</th>
                            <th>{tr!(i18n, EMAIL)}</th>
                            <th>{tr!(i18n, ROLE)}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td id="userId">{id}</td>
                            <td id="userFirstName">{user.first_name_text()}</td>
                            <td id="userLastName">{user.last_name_text()}</td>
                            <td id="userAge">{user.age_text()}</td>
                            <td id="userEmailDisplay">{user.email_text()}</td>
                            <td id="userRolesDisplay">{roles}</td>
                        </tr>
                    </tbody>
                </table>
                <button type="button" class="btn btn-primary" disabled={props.user.is_none()} {onclick}>
                    {tr!(i18n, "edit_profile")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use console_sdk::model::role::Role;

    use super::*;

    fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
        utils::create_bundle(lang.pick(en_us::PROFILE, ru_ru::PROFILE))
    }

    #[test]
    fn user_without_roles_reads_no_roles_assigned() {
        let user = User {
            id: 4,
            ..Default::default()
        };
        assert_eq!(
            roles_label(&bundle(LanguageType::EnUS), &user),
            "No roles assigned"
        );
    }

    #[test]
    fn roles_are_bracketed() {
        let user = User {
            id: 4,
            roles: vec![
                Role {
                    id: 1,
                    name: "ADMIN".into(),
                    description: None,
                },
                Role {
                    id: 2,
                    name: "USER".into(),
                    description: None,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            roles_label(&bundle(LanguageType::EnUS), &user),
            "[ADMIN] [USER]"
        );
    }
}
