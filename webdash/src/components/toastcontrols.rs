use yew::{
    prelude::*,
    function_component,
    html,
};

use yew_feather::{
    alert_triangle,
    check_circle,
    info,
    x_circle,
};

use toast_queue::*;

fn gen_callback(queue: &ToastQueue, kind: ToastKind, message: &'static str) -> Callback<MouseEvent> {
    let queue = queue.clone();
    Callback::from(move |_| {
        queue.show_kind(message, kind.clone());
    })
}

#[function_component(ToastControls)]
pub fn toast_controls() -> Html {
    let Some(queue) = use_context::<ToastQueue>() else {
        log::error!("ToastControls rendered without a ToastQueue in context");
        return html! {};
    };

    let oninfo = gen_callback(&queue, ToastKind::Info, "Just so you know");
    let onsuccess = gen_callback(&queue, ToastKind::Success, "Saved");
    let onwarning = gen_callback(&queue, ToastKind::Warning, "Running low on disk space");

    let onerror = {
        let queue = queue.clone();
        Callback::from(move |_| {
            toast_error!(queue, "Something went wrong")
        })
    };

    let iconclass = "column is-flex is-2 is-justify-content-center controlicon";

    html! {
            <div class="columns is-centered is-mobile">
                <div class={iconclass} onclick={oninfo} title="Show an info toast">
                    <info::Info />
                </div>
                <div class={iconclass} onclick={onsuccess} title="Show a success toast">
                    <check_circle::CheckCircle />
                </div>
                <div class={iconclass} onclick={onwarning} title="Show a warning toast">
                    <alert_triangle::AlertTriangle />
                </div>
                <div class={iconclass} onclick={onerror} title="Show an error toast">
                    <x_circle::XCircle />
                </div>
            </div>
    }
}
