use std::{collections::BTreeMap, rc::Rc};

use fluent::{FluentBundle, FluentResource};
use gloo::timers::callback::Timeout;
use yew::{classes, html, Component, Context, Html, Properties};
use yewdux::Dispatch;

use console_sdk::model::notification::Notification;
use console_sdk::state::I18nState;
use i18n::{en_us, ru_ru};
use utils::tr;

use crate::constant::CLOSE;

/// ordered by id so alerts stack in the order they were raised
type NotificationList = BTreeMap<u64, (Rc<Notification>, Timeout)>;

/// Fixed container stacking dismissible alerts.
pub struct NotificationCom {
    notifications: NotificationList,
    i18n: FluentBundle<FluentResource>,
    _noti_dis: Dispatch<Notification>,
    _i18n_dis: Dispatch<I18nState>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    Notification(Rc<Notification>),
    Remove(u64),
    I18nStateChanged(Rc<I18nState>),
}

impl Component for NotificationCom {
    type Message = Msg;

    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let _noti_dis = Dispatch::<Notification>::global()
            .subscribe_silent(ctx.link().callback(Msg::Notification));
        let _i18n_dis = Dispatch::<I18nState>::global()
            .subscribe_silent(ctx.link().callback(Msg::I18nStateChanged));
        let i18n = utils::create_bundle(_i18n_dis.get().lang.pick(en_us::ALERT, ru_ru::ALERT));
        Self {
            notifications: BTreeMap::new(),
            i18n,
            _noti_dis,
            _i18n_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Notification(noti) => {
                let id = noti.id;
                let link = ctx.link().clone();
                let timeout = Timeout::new(noti.delay, move || link.send_message(Msg::Remove(id)));
                self.notifications.insert(id, (noti, timeout));
                true
            }
            Msg::Remove(id) => self.notifications.remove(&id).is_some(),
            Msg::I18nStateChanged(state) => {
                self.i18n = utils::create_bundle(state.lang.pick(en_us::ALERT, ru_ru::ALERT));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let close_label = tr!(self.i18n, CLOSE);
        let notifications = self
            .notifications
            .iter()
            .map(|(id, (item, _))| {
                let id = *id;
                let class = classes!(
                    "alert",
                    item.type_.class(),
                    "alert-dismissible",
                    "fade",
                    "show"
                );
                let onclick = ctx.link().callback(move |_| Msg::Remove(id));
                html! {
                    <div {class} role="alert" key={id.to_string()}>
                        <strong>{item.content.clone()}</strong>
                        <button type="button" class="btn-close" aria-label={close_label.clone()} {onclick}></button>
                    </div>
                }
            })
            .collect::<Html>();
        html! {
            <div id="alertContainer" class="alert-container">
                {notifications}
            </div>
        }
    }
}
