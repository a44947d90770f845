use std::cell::Cell;

use yew::{
    prelude::*,
    html,
    platform::spawn_local,
};

use super::*;

/// Current toasts of `queue`, re-rendering the caller whenever they change
#[hook]
pub fn use_toasts(queue: &ToastQueue) -> ToastList {
    let toasts = use_state(|| queue.toasts());

    {
        let toasts = toasts.clone();
        use_effect_with_deps(move |queue| {
            let mut rx = queue.subscribe();
            let alive = Rc::new(Cell::new(true));

            {
                let alive = alive.clone();
                spawn_local(async move {
                    toasts.set(rx.borrow_and_update().clone());

                    while rx.changed().await.is_ok() {
                        if !alive.get() {
                            break;
                        }
                        toasts.set(rx.borrow_and_update().clone());
                    }
                });
            }

            move || alive.set(false)
        }, queue.clone());
    }

    (*toasts).clone()
}


#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Toast,
}

#[function_component(ToastPopup)]
pub fn toast_popup(props: &ToastProps) -> Html {
    let class = format!("notification toast {} mb-4", props.toast.kind.css_class());

    html! {
        <div {class}>
            { props.toast.message.clone() }
        </div>
    }
}


#[derive(Properties, PartialEq)]
pub struct ToastListProps {
    pub queue: ToastQueue,
}

#[function_component(ToastListView)]
pub fn toast_list_view(props: &ToastListProps) -> Html {
    let toasts = use_toasts(&props.queue);

    html! {
        <div class="toasttray">
            {
                for toasts.iter().map(|toast| html! {
                    <ToastPopup key={toast.id.to_string()} toast={toast.clone()} />
                })
            }
        </div>
    }
}

/// Renders the toasts of the [`ToastQueue`] found in context
#[function_component(ToastTray)]
pub fn toast_tray() -> Html {
    match use_context::<ToastQueue>() {
        Some(queue) => html! { <ToastListView {queue} /> },
        None => {
            log::error!("ToastTray rendered without a ToastQueue in context, this is probably a bug!");
            html! {}
        },
    }
}
