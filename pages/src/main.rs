mod admin;
mod profile;

use yew::prelude::*;
use yew_router::prelude::Redirect;
use yew_router::{BrowserRouter, Switch};

use components::notification::NotificationCom;
use console_sdk::model::page::Page;

use crate::admin::AdminApp;
use crate::profile::ProfileApp;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <NotificationCom />
            <Switch<Page> render={move |page|
                match page {
                    Page::Admin => html!{<AdminApp />},
                    Page::Profile => html!{<ProfileApp />},
                    Page::Redirect => html!{<Redirect<Page> to={Page::Profile} />},
                    Page::NotFound => html!{<h1 class="text-center mt-5">{"404"}</h1>},
                }
            }/>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
