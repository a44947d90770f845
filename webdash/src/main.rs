use yew::{
    prelude::*,
    html
};

use toast_queue::{ToastQueue, ToastTray};

mod components;
use components::*;

#[function_component(Dash)]
fn dash() -> Html {
    // One queue for the lifetime of the app, shared through context
    let queue = use_state(ToastQueue::default);

    html! {
        <ContextProvider<ToastQueue> context={(*queue).clone()}>
            <div class="container">
                <ToastControls />
            </div>
            <ToastTray />
        </ContextProvider<ToastQueue>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Dash>::new().render();
}
