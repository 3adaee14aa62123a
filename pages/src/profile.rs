use std::rc::Rc;

use fluent::{FluentBundle, FluentResource};
use yew::prelude::*;
use yewdux::Dispatch;

use components::constant::CLOSE;
use components::modal::Modal;
use components::navbar::{Navbar, Sidebar};
use components::profile_card::ProfileCard;
use components::profile_form::ProfileForm;
use console_sdk::api;
use console_sdk::model::notification::Notification;
use console_sdk::model::page::Page;
use console_sdk::model::response::Reply;
use console_sdk::model::user::{ProfileFormData, User};
use console_sdk::state::I18nState;
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

/// Self-service profile page.
pub struct ProfileApp {
    user: Option<User>,
    editing: bool,
    saving: bool,
    i18n: FluentBundle<FluentResource>,
    lang: LanguageType,
    _i18n_dis: Dispatch<I18nState>,
}

pub enum ProfileMsg {
    Load,
    Loaded(console_sdk::Result<User>),
    OpenEdit,
    CloseEdit,
    Submit(ProfileFormData),
    Updated(console_sdk::Result<Reply<User>>),
    I18nChanged(Rc<I18nState>),
}

fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(lang.pick(en_us::PROFILE, ru_ru::PROFILE))
}

impl Component for ProfileApp {
    type Message = ProfileMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _i18n_dis = Dispatch::<I18nState>::global()
            .subscribe_silent(ctx.link().callback(ProfileMsg::I18nChanged));
        let lang = _i18n_dis.get().lang;
        let i18n = bundle(lang);
        utils::set_title(&tr!(i18n, "title"));
        ctx.link().send_message(ProfileMsg::Load);
        Self {
            user: None,
            editing: false,
            saving: false,
            i18n,
            lang,
            _i18n_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProfileMsg::Load => {
                ctx.link()
                    .send_future(async { ProfileMsg::Loaded(api::profile().get_profile().await) });
                false
            }
            ProfileMsg::Loaded(result) => match result {
                Ok(user) => {
                    self.user = Some(user);
                    true
                }
                Err(err) => {
                    Notification::error(tr!(self.i18n, "load_failed"), err).notify();
                    false
                }
            },
            ProfileMsg::OpenEdit => {
                if self.user.is_none() {
                    return false;
                }
                self.editing = true;
                true
            }
            ProfileMsg::CloseEdit => {
                self.editing = false;
                true
            }
            ProfileMsg::Submit(data) => {
                let profile = match data.to_update() {
                    Ok(profile) => profile,
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "update_failed"), err).notify();
                        return false;
                    }
                };
                self.saving = true;
                ctx.link().send_future(async {
                    ProfileMsg::Updated(api::profile().update_profile(profile).await)
                });
                true
            }
            ProfileMsg::Updated(result) => {
                self.saving = false;
                match result {
                    Ok(Reply { message, data }) => {
                        if message.trim().is_empty() {
                            Notification::success(tr!(self.i18n, "done")).notify();
                        } else {
                            Notification::success(message).notify();
                        }
                        self.user = Some(data);
                        self.editing = false;
                    }
                    Err(err) => {
                        Notification::error(tr!(self.i18n, "update_failed"), err).notify()
                    }
                }
                true
            }
            ProfileMsg::I18nChanged(state) => {
                self.lang = state.lang;
                self.i18n = bundle(self.lang);
                utils::set_title(&tr!(self.i18n, "title"));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let modal = match (&self.user, self.editing) {
            (Some(user), true) => html! {
                <Modal id="editProfileModal"
                    title={tr!(self.i18n, "edit_profile")}
                    close_label={tr!(self.i18n, CLOSE)}
                    close={link.callback(|_| ProfileMsg::CloseEdit)}>
                    <ProfileForm
                        user={user.clone()}
                        loading={self.saving}
                        submit={link.callback(ProfileMsg::Submit)}
                        close={link.callback(|_| ProfileMsg::CloseEdit)}
                        lang={self.lang} />
                </Modal>
            },
            _ => html!(),
        };

        html! {
            <>
                <Navbar user={self.user.clone()} lang={self.lang} refresh={link.callback(|_| ProfileMsg::Load)} />
                <div class="container-fluid">
                    <div class="row">
                        <div class="col-md-2 bg-white pt-3 min-vh-100">
                            <Sidebar user={self.user.clone()} active={Page::Profile} lang={self.lang} />
                        </div>
                        <main class="col-md-10 bg-light pt-3 px-4 min-vh-100">
                            <h1>{tr!(self.i18n, "title")}</h1>
                            <ProfileCard
                                user={self.user.clone()}
                                lang={self.lang}
                                on_edit={link.callback(|_| ProfileMsg::OpenEdit)} />
                        </main>
                    </div>
                </div>
                {modal}
            </>
        }
    }
}
