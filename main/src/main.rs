use log::*;

use toast_config::Configuration;
use toast_queue::ToastQueue;

mod script;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    env_logger::init();

    let conf = Configuration::load().unwrap_or_else(|why| {
        error!("Could not load configuration, falling back to defaults: {}", why);
        Configuration::default()
    });

    debug!("config = {:?}", conf);

    let queue = ToastQueue::new(conf.toast.clone());

    let tray = {
        let mut rx = queue.subscribe();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let line = script::render(&rx.borrow_and_update());
                println!("{}", line);
            }
        })
    };

    script::play(&queue, &conf.demo.toasts).await;
    script::drained(queue.subscribe()).await;

    info!("all toasts expired");
    tray.abort();
}
