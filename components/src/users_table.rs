use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;

use console_sdk::model::user::User;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

use crate::constant::{AGE, DELETE, EDIT, EMAIL, FIRST_NAME, ID, LAST_NAME, ROLE};
use crate::loading::TableLoading;

/// id, first name, last name, age, email, roles, edit, delete
pub const COLUMNS: usize = 8;

pub struct UsersTable {
    i18n: FluentBundle<FluentResource>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct UsersTableProps {
    pub users: Vec<User>,
    pub loading: bool,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
    pub lang: LanguageType,
}

/// label and colspan of the single placeholder row shown for an empty list
fn empty_row(i18n: &FluentBundle<FluentResource>, users: &[User]) -> Option<(String, usize)> {
    users
        .is_empty()
        .then(|| (tr!(i18n, "no_users"), COLUMNS))
}

fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(lang.pick(en_us::USERS_TABLE, ru_ru::USERS_TABLE))
}

impl Component for UsersTable {
    type Message = ();
    type Properties = UsersTableProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            i18n: bundle(ctx.props().lang),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().lang != old_props.lang {
            self.i18n = bundle(ctx.props().lang);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let rows = match empty_row(&self.i18n, &props.users) {
            Some((label, colspan)) => html! {
                <tr>
                    <td colspan={colspan.to_string()} class="text-center">{label}</td>
                </tr>
            },
            None => props
                .users
                .iter()
                .map(|user| self.row(ctx, user))
                .collect::<Html>(),
        };
        let class = classes!(
            "table",
            "table-striped",
            props.loading.then_some("loading")
        );
        html! {
            <div class="users-table-wrapper">
                <TableLoading loading={props.loading} label={tr!(self.i18n, "loading")} />
                <table id="usersTable" {class}>
                    <thead>
                        <tr>
                            <th>{tr!(self.i18n, ID)}</th>
                            <th>{tr!(self.i18n, FIRST_NAME)}</th>
                            <th>{tr!(self.i18n, LAST_NAME)}</th>
                            <th>{tr!(self.i18n, AGE)}</th>
                            <th>{tr!(self.i18n, EMAIL)}</th>
                            <th>{tr!(self.i18n, ROLE)}</th>
                            <th>{tr!(self.i18n, EDIT)}</th>
                            <th>{tr!(self.i18n, DELETE)}</th>
                        </tr>
                    </thead>
                    <tbody id="usersTableBody">
                        {rows}
                    </tbody>
                </table>
            </div>
        }
    }
}

impl UsersTable {
    fn row(&self, ctx: &Context<Self>, user: &User) -> Html {
        let id = user.id;
        let on_edit = ctx.props().on_edit.reform(move |_: MouseEvent| id);
        let on_delete = ctx.props().on_delete.reform(move |_: MouseEvent| id);
        html! {
            <tr key={id.to_string()}>
                <td>{id.to_string()}</td>
                <td>{user.first_name_text()}</td>
                <td>{user.last_name_text()}</td>
                <td>{user.age_text()}</td>
                <td>{user.email_text()}</td>
                <td>{user.roles_joined()}</td>
                <td>
                    <button type="button"
                        class="btn btn-info text-white btn-sm edit-user-btn"
                        data-user-id={id.to_string()}
                        onclick={on_edit}>
                        <i class="bi bi-pencil"></i>{" "}{tr!(self.i18n, EDIT)}
                    </button>
                </td>
                <td>
                    <button type="button"
                        class="btn btn-danger btn-sm delete-user-btn"
                        data-user-id={id.to_string()}
                        onclick={on_delete}>
                        <i class="bi bi-trash"></i>{" "}{tr!(self.i18n, DELETE)}
                    </button>
                </td>
            </tr>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_spans_every_column() {
        let i18n = bundle(LanguageType::EnUS);
        assert_eq!(
            empty_row(&i18n, &[]),
            Some(("No users found".to_string(), 8))
        );
    }

    #[test]
    fn no_placeholder_when_users_present() {
        let i18n = bundle(LanguageType::RuRU);
        let users = vec![User {
            id: 1,
            ..Default::default()
        }];
        assert_eq!(empty_row(&i18n, &users), None);
    }
}
