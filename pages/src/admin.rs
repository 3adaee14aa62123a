use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;
use yewdux::Dispatch;

use components::constant::CLOSE;
use components::dialog::ConfirmDialog;
use components::modal::Modal;
use components::navbar::{Navbar, Sidebar};
use components::roles_panel::RolesPanel;
use components::user_form::{FormMode, UserForm};
use components::users_table::UsersTable;
use console_sdk::api;
use console_sdk::model::notification::Notification;
use console_sdk::model::page::Page;
use console_sdk::model::response::Reply;
use console_sdk::model::role::{Role, RoleForm};
use console_sdk::model::user::{User, UserFormData};
use console_sdk::state::I18nState;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

/// User management console.
pub struct AdminApp {
    users: Vec<User>,
    /// roles offered by the user forms
    roles: Vec<Role>,
    /// roles tab content
    catalogue: Vec<Role>,
    me: Option<User>,
    users_seq: RequestSeq,
    roles_created: u32,
    table_loading: bool,
    saving: bool,
    tab: Tab,
    modal: Option<UserModal>,
    i18n: FluentBundle<FluentResource>,
    lang: LanguageType,
    _i18n_dis: Dispatch<I18nState>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Users,
    Roles,
}

pub enum UserModal {
    Add,
    Edit(UserFormData),
}

pub enum AdminMsg {
    Refresh,
    RolesLoaded(console_sdk::Result<Vec<Role>>),
    LoadUsers,
    UsersLoaded(u64, console_sdk::Result<Vec<User>>),
    ProfileLoaded(console_sdk::Result<User>),
    OpenAdd,
    OpenEdit(i64),
    CloseModal,
    SubmitAdd(UserFormData),
    Created(console_sdk::Result<Reply<User>>),
    SubmitEdit(UserFormData),
    Updated(console_sdk::Result<Reply<User>>),
    ConfirmDelete(i64),
    DeleteUser(i64),
    Deleted(console_sdk::Result<String>),
    LoadCatalogue,
    CatalogueLoaded(console_sdk::Result<Vec<Role>>),
    CreateRole(String),
    RoleCreated(console_sdk::Result<Reply<Role>>),
    ConfirmDeleteRole(i64),
    DeleteRole(i64),
    RoleDeleted(console_sdk::Result<String>),
    SwitchTab(Tab),
    I18nChanged(Rc<I18nState>),
}

/// Tags overlapping requests of one kind so only the newest reply is applied.
#[derive(Debug, Default)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.0
    }
}

fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(lang.pick(en_us::ADMIN, ru_ru::ADMIN))
}

impl Component for AdminApp {
    type Message = AdminMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _i18n_dis =
            Dispatch::<I18nState>::global().subscribe_silent(ctx.link().callback(AdminMsg::I18nChanged));
        let lang = _i18n_dis.get().lang;
        let i18n = bundle(lang);
        utils::set_title(&tr!(i18n, "title"));

        ctx.link().send_message(AdminMsg::Refresh);
        ctx.link().send_message(AdminMsg::LoadCatalogue);
        ctx.link().send_future(async {
            AdminMsg::ProfileLoaded(api::profile().get_profile().await)
        });

        Self {
            users: Vec::new(),
            roles: Vec::new(),
            catalogue: Vec::new(),
            me: None,
            users_seq: RequestSeq::default(),
            roles_created: 0,
            table_loading: false,
            saving: false,
            tab: Tab::Users,
            modal: None,
            i18n,
            lang,
            _i18n_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminMsg::Refresh => {
                // roles first, the user forms need them
                ctx.link()
                    .send_future(async { AdminMsg::RolesLoaded(api::admin().list_roles().await) });
                false
            }
            AdminMsg::RolesLoaded(result) => {
                match result {
                    Ok(roles) => self.roles = roles,
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "load_roles_failed"), err).notify()
                    }
                }
                ctx.link().send_message(AdminMsg::LoadUsers);
                true
            }
            AdminMsg::LoadUsers => {
                self.table_loading = true;
                let seq = self.users_seq.next();
                ctx.link().send_future(async move {
                    AdminMsg::UsersLoaded(seq, api::admin().list_users().await)
                });
                true
            }
            AdminMsg::UsersLoaded(seq, result) => {
                if !self.users_seq.is_latest(seq) {
                    log::debug!("dropping stale users reply {}", seq);
                    return false;
                }
                self.table_loading = false;
                match result {
                    Ok(users) => {
                        log::debug!("loaded {} users", users.len());
                        self.users = users;
                    }
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "load_users_failed"), err).notify()
                    }
                }
                true
            }
            AdminMsg::ProfileLoaded(result) => match result {
                Ok(me) => {
                    self.me = Some(me);
                    true
                }
                Err(err) => {
                    log::error!("load current user failed: {}", err);
                    false
                }
            },
            AdminMsg::OpenAdd => {
                self.modal = Some(UserModal::Add);
                true
            }
            AdminMsg::OpenEdit(id) => {
                match self.users.iter().find(|user| user.id == id) {
                    Some(user) => self.modal = Some(UserModal::Edit(UserFormData::from_user(user))),
                    None => Notification::danger(tr!(self.i18n, "user_not_found")).notify(),
                }
                true
            }
            AdminMsg::CloseModal => {
                self.modal = None;
                true
            }
            AdminMsg::SubmitAdd(data) => {
                let user = match data.to_create() {
                    Ok(user) => user,
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "create_failed"), err).notify();
                        return false;
                    }
                };
                self.saving = true;
                ctx.link()
                    .send_future(async { AdminMsg::Created(api::admin().create_user(user).await) });
                true
            }
            AdminMsg::Created(result) => {
                self.saving = false;
                match result {
                    Ok(reply) => {
                        self.success(reply.message);
                        self.modal = None;
                        ctx.link().send_message(AdminMsg::LoadUsers);
                    }
                    Err(err) => Notification::error(tr!(self.i18n, "create_failed"), err).notify(),
                }
                true
            }
            AdminMsg::SubmitEdit(data) => {
                let (id, user) = match data.to_update() {
                    Ok(update) => update,
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "update_failed"), err).notify();
                        return false;
                    }
                };
                self.saving = true;
                ctx.link().send_future(async move {
                    AdminMsg::Updated(api::admin().update_user(id, user).await)
                });
                true
            }
            AdminMsg::Updated(result) => {
                self.saving = false;
                match result {
                    Ok(reply) => {
                        self.success(reply.message);
                        self.modal = None;
                        ctx.link().send_message(AdminMsg::LoadUsers);
                    }
                    Err(err) => Notification::error(tr!(self.i18n, "update_failed"), err).notify(),
                }
                true
            }
            AdminMsg::ConfirmDelete(id) => {
                let title = tr!(self.i18n, "confirm_title");
                let text = tr!(self.i18n, "confirm_delete_user");
                let confirm = tr!(self.i18n, "confirm_delete");
                ctx.link().send_future_batch(async move {
                    if ConfirmDialog::ask(title, text, Some(confirm.into())).await {
                        vec![AdminMsg::DeleteUser(id)]
                    } else {
                        vec![]
                    }
                });
                false
            }
            AdminMsg::DeleteUser(id) => {
                ctx.link()
                    .send_future(async move { AdminMsg::Deleted(api::admin().delete_user(id).await) });
                false
            }
            AdminMsg::Deleted(result) => {
                match result {
                    Ok(message) => {
                        self.success(message.into());
                        ctx.link().send_message(AdminMsg::LoadUsers);
                    }
                    Err(err) => Notification::error(tr!(self.i18n, "delete_failed"), err).notify(),
                }
                false
            }
            AdminMsg::LoadCatalogue => {
                ctx.link()
                    .send_future(async { AdminMsg::CatalogueLoaded(api::roles().list().await) });
                false
            }
            AdminMsg::CatalogueLoaded(result) => match result {
                Ok(roles) => {
                    self.catalogue = roles;
                    true
                }
                Err(err) => {
                    Notification::error(tr!(self.i18n, "load_roles_failed"), err).notify();
                    false
                }
            },
            AdminMsg::CreateRole(name) => {
                let role = match RoleForm::new(&name) {
                    Ok(role) => role,
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "role_create_failed"), err).notify();
                        return false;
                    }
                };
                self.saving = true;
                ctx.link()
                    .send_future(async { AdminMsg::RoleCreated(api::roles().create(role).await) });
                true
            }
            AdminMsg::RoleCreated(result) => {
                self.saving = false;
                match result {
                    Ok(reply) => {
                        self.success(reply.message);
                        self.roles_created = self.roles_created.wrapping_add(1);
                        self.reload_roles(ctx);
                    }
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "role_create_failed"), err).notify()
                    }
                }
                true
            }
            AdminMsg::ConfirmDeleteRole(id) => {
                let title = tr!(self.i18n, "confirm_title");
                let text = tr!(self.i18n, "confirm_delete_role");
                let confirm = tr!(self.i18n, "confirm_delete");
                ctx.link().send_future_batch(async move {
                    if ConfirmDialog::ask(title, text, Some(confirm.into())).await {
                        vec![AdminMsg::DeleteRole(id)]
                    } else {
                        vec![]
                    }
                });
                false
            }
            AdminMsg::DeleteRole(id) => {
                ctx.link()
                    .send_future(async move { AdminMsg::RoleDeleted(api::roles().delete(id).await) });
                false
            }
            AdminMsg::RoleDeleted(result) => {
                match result {
                    Ok(message) => {
                        self.success(message.into());
                        self.reload_roles(ctx);
                    }
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "role_delete_failed"), err).notify()
                    }
                }
                false
            }
            AdminMsg::SwitchTab(tab) => {
                if self.tab == tab {
                    return false;
                }
                self.tab = tab;
                true
            }
            AdminMsg::I18nChanged(state) => {
                self.lang = state.lang;
                self.i18n = bundle(self.lang);
                utils::set_title(&tr!(self.i18n, "title"));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_class = |tab: Tab| classes!("nav-link", (self.tab == tab).then_some("active"));

        let content = match self.tab {
            Tab::Users => html! {
                <div class="card">
                    <div class="card-header fw-bold">{tr!(self.i18n, "all_users")}</div>
                    <div class="card-body">
                        <UsersTable
                            users={self.users.clone()}
                            loading={self.table_loading}
                            on_edit={link.callback(AdminMsg::OpenEdit)}
                            on_delete={link.callback(AdminMsg::ConfirmDelete)}
                            lang={self.lang} />
                    </div>
                </div>
            },
            Tab::Roles => html! {
                <RolesPanel
                    roles={self.catalogue.clone()}
                    saving={self.saving}
                    created={self.roles_created}
                    on_create={link.callback(AdminMsg::CreateRole)}
                    on_delete={link.callback(AdminMsg::ConfirmDeleteRole)}
                    lang={self.lang} />
            },
        };

        let modal = match &self.modal {
            Some(UserModal::Add) => html! {
                <Modal id="addUserModal"
                    title={tr!(self.i18n, "add_new_user")}
                    close_label={tr!(self.i18n, CLOSE)}
                    close={link.callback(|_| AdminMsg::CloseModal)}>
                    <UserForm
                        mode={FormMode::Add}
                        roles={self.roles.clone()}
                        loading={self.saving}
                        submit={link.callback(AdminMsg::SubmitAdd)}
                        close={link.callback(|_| AdminMsg::CloseModal)}
                        lang={self.lang} />
                </Modal>
            },
            Some(UserModal::Edit(initial)) => html! {
                <Modal id="editUserModal"
                    title={tr!(self.i18n, "edit_user")}
                    close_label={tr!(self.i18n, CLOSE)}
                    close={link.callback(|_| AdminMsg::CloseModal)}>
                    <UserForm
                        mode={FormMode::Edit}
                        initial={initial.clone()}
                        roles={self.roles.clone()}
                        loading={self.saving}
                        submit={link.callback(AdminMsg::SubmitEdit)}
                        close={link.callback(|_| AdminMsg::CloseModal)}
                        lang={self.lang} />
                </Modal>
            },
            None => html!(),
        };

        html! {
            <>
                <Navbar user={self.me.clone()} lang={self.lang} refresh={link.callback(|_| AdminMsg::Refresh)} />
                <div class="container-fluid">
                    <div class="row">
                        <div class="col-md-2 bg-white pt-3 min-vh-100">
                            <Sidebar user={self.me.clone()} active={Page::Admin} lang={self.lang} />
                        </div>
                        <main class="col-md-10 bg-light pt-3 px-4 min-vh-100">
                            <h1>{tr!(self.i18n, "title")}</h1>
                            <ul class="nav nav-tabs">
                                <li class="nav-item">
                                    <a href="#" class={tab_class(Tab::Users)}
                                        onclick={link.callback(|e: MouseEvent| { e.prevent_default(); AdminMsg::SwitchTab(Tab::Users) })}>
                                        {tr!(self.i18n, "users_tab")}
                                    </a>
                                </li>
                                <li class="nav-item">
                                    <a href="#" class="nav-link"
                                        onclick={link.callback(|e: MouseEvent| { e.prevent_default(); AdminMsg::OpenAdd })}>
                                        {tr!(self.i18n, "new_user_tab")}
                                    </a>
                                </li>
                                <li class="nav-item">
                                    <a href="#" class={tab_class(Tab::Roles)}
                                        onclick={link.callback(|e: MouseEvent| { e.prevent_default(); AdminMsg::SwitchTab(Tab::Roles) })}>
                                        {tr!(self.i18n, "roles_tab")}
                                    </a>
                                </li>
                            </ul>
                            {content}
                        </main>
                    </div>
                </div>
                {modal}
            </>
        }
    }
}

impl AdminApp {
    /// server message, or the translated "Done" when it is blank
    fn success(&self, message: AttrValue) {
        if message.trim().is_empty() {
            Notification::success(tr!(self.i18n, "done")).notify();
        } else {
            Notification::success(message).notify();
        }
    }

    /// role changes touch both the catalogue and the form selects
    fn reload_roles(&self, ctx: &Context<Self>) {
        ctx.link().send_message(AdminMsg::LoadCatalogue);
        ctx.link().send_message(AdminMsg::Refresh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_users_reply_applies() {
        let mut seq = RequestSeq::default();
        let refresh = seq.next();
        let after_delete = seq.next();
        // the refresh reply arrives last but was requested first
        assert!(seq.is_latest(after_delete));
        assert!(!seq.is_latest(refresh));
    }

    #[test]
    fn single_request_is_latest() {
        let mut seq = RequestSeq::default();
        let only = seq.next();
        assert!(seq.is_latest(only));
    }
}
