use fluent::{FluentBundle, FluentResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use zxcvbn::zxcvbn;

use console_sdk::model::user::{ProfileFormData, User};
use i18n::{en_us, ru_ru, LanguageType};
use utils::tr;

use crate::constant::{AGE, CLOSE, EMAIL, FIRST_NAME, LAST_NAME, SAVE};
use crate::input_value;
use crate::loading::LoadingButton;

/// Edit form of the profile modal. Pre-filled from the user on every mount,
/// password fields always start empty.
pub struct ProfileForm {
    first_name_node: NodeRef,
    last_name_node: NodeRef,
    age_node: NodeRef,
    current_pwd_node: NodeRef,
    new_pwd_node: NodeRef,
    pwd_strength: u8,
    i18n: FluentBundle<FluentResource>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProfileFormProps {
    pub user: User,
    pub loading: bool,
    pub submit: Callback<ProfileFormData>,
    pub close: Callback<()>,
    pub lang: LanguageType,
}

pub enum ProfileFormMsg {
    OnNewPwdInput(InputEvent),
    Submit(SubmitEvent),
}

fn bundle(lang: LanguageType) -> FluentBundle<FluentResource> {
    utils::create_bundle(lang.pick(en_us::PROFILE_FORM, ru_ru::PROFILE_FORM))
}

/// zxcvbn score scaled to a 0..=100 meter
pub fn password_strength(pwd: &str) -> u8 {
    zxcvbn(pwd, &[])
        .map(|estimate| estimate.score() * 25)
        .unwrap_or(0)
}

impl Component for ProfileForm {
    type Message = ProfileFormMsg;
    type Properties = ProfileFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            first_name_node: NodeRef::default(),
            last_name_node: NodeRef::default(),
            age_node: NodeRef::default(),
            current_pwd_node: NodeRef::default(),
            new_pwd_node: NodeRef::default(),
            pwd_strength: 0,
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
            ProfileFormMsg::OnNewPwdInput(event) => {
                let pwd = event.target_unchecked_into::<HtmlInputElement>().value();
                self.pwd_strength = password_strength(&pwd);
                true
            }
            ProfileFormMsg::Submit(event) => {
                event.prevent_default();
                if ctx.props().loading {
                    return false;
                }
                let data = ProfileFormData {
                    first_name: input_value(&self.first_name_node),
                    last_name: input_value(&self.last_name_node),
                    age: input_value(&self.age_node),
                    current_password: input_value(&self.current_pwd_node),
                    new_password: input_value(&self.new_pwd_node),
                };
                ctx.props().submit.emit(data);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let initial = ProfileFormData::from_user(&props.user);
        let pwd_strength = if self.pwd_strength > 0 {
            html! {
                <meter
                    max="100"
                    low="33"
                    high="66"
                    optimum="75"
                    value={self.pwd_strength.to_string()}>
                </meter>
            }
        } else {
            html!()
        };
        let on_cancel = props.close.reform(|_: MouseEvent| ());

        html! {
            <form id="editProfileForm" onsubmit={ctx.link().callback(ProfileFormMsg::Submit)}>
                <div class="modal-body text-center">
                    <div class="mb-3">
                        <label for="edit-firstName" class="form-label fw-bold">{tr!(self.i18n, FIRST_NAME)}</label>
                        <input ref={self.first_name_node.clone()}
                            type="text"
                            id="edit-firstName"
                            name="firstName"
                            class="form-control"
                            required={true}
                            value={initial.first_name} />
                    </div>
                    <div class="mb-3">
                        <label for="edit-lastName" class="form-label fw-bold">{tr!(self.i18n, LAST_NAME)}</label>
                        <input ref={self.last_name_node.clone()}
                            type="text"
                            id="edit-lastName"
                            name="lastName"
                            class="form-control"
                            required={true}
                            value={initial.last_name} />
                    </div>
                    <div class="mb-3">
                        <label for="edit-age" class="form-label fw-bold">{tr!(self.i18n, AGE)}</label>
                        <input ref={self.age_node.clone()}
                            type="number"
                            min="0"
                            id="edit-age"
                            name="age"
                            class="form-control"
                            required={true}
                            value={initial.age} />
                    </div>
                    <div class="mb-3">
                        <label for="edit-email" class="form-label fw-bold">{tr!(self.i18n, EMAIL)}</label>
                        <input type="email"
                            id="edit-email"
                            class="form-control"
                            readonly={true}
                            value={props.user.email_text()} />
                    </div>
                    <div class="mb-3">
                        <label for="edit-currentPassword" class="form-label fw-bold">{tr!(self.i18n, "current_password")}</label>
                        <input ref={self.current_pwd_node.clone()}
                            type="password"
                            id="edit-currentPassword"
                            name="currentPassword"
                            class="form-control"
                            autocomplete="current-password" />
                    </div>
                    <div class="mb-3">
                        <label for="edit-newPassword" class="form-label fw-bold">{tr!(self.i18n, "new_password")}</label>
                        <input ref={self.new_pwd_node.clone()}
                            type="password"
                            id="edit-newPassword"
                            name="newPassword"
                            class="form-control"
                            autocomplete="new-password"
                            oninput={ctx.link().callback(ProfileFormMsg::OnNewPwdInput)} />
                        {pwd_strength}
                        <div class="form-text">{tr!(self.i18n, "password_hint")}</div>
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>{tr!(self.i18n, CLOSE)}</button>
                    <LoadingButton id="editProfileBtn" label={tr!(self.i18n, SAVE)} loading={props.loading} />
                </div>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_no_strength() {
        assert_eq!(password_strength(""), 0);
    }

    #[test]
    fn strong_password_scores_higher_than_weak() {
        let weak = password_strength("1234");
        let strong = password_strength("correct-horse-battery-staple-42!");
        assert!(weak < strong);
        assert!(strong <= 100);
    }
}
