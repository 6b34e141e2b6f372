use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings::get_settings;

#[function_component(Settings)]
pub fn settings() -> Html {
    let current = get_settings();
    let host_ref = use_node_ref();
    let port_ref = use_node_ref();
    let refresh_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_save = {
        let host_ref = host_ref.clone();
        let port_ref = port_ref.clone();
        let refresh_ref = refresh_ref.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: MouseEvent| {
            let mut settings = get_settings();

            if let Some(input) = host_ref.cast::<HtmlInputElement>() {
                let host = input.value();
                if !host.trim().is_empty() {
                    settings.api_host = host.trim().to_string();
                }
            }

            if let Some(input) = port_ref.cast::<HtmlInputElement>() {
                if let Ok(port) = input.value().parse::<u16>() {
                    settings.api_port = port;
                }
            }

            if let Some(input) = refresh_ref.cast::<HtmlInputElement>() {
                if let Ok(interval) = input.value().parse::<u32>() {
                    settings.refresh_interval_ms = interval.max(1000);
                }
            }

            match settings.save_to_storage() {
                Ok(()) => {
                    log::info!("Settings saved, reloading application");
                    if let Some(window) = window() {
                        let _ = window.location().reload();
                    }
                }
                Err(e) => {
                    log::error!("Failed to save settings: {:?}", e);
                    toast_ctx.show_danger("Failed to save settings".to_string());
                }
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label"><span class="label-text">{"API Host"}</span></label>
                        <input
                            ref={host_ref}
                            type="text"
                            class="input input-bordered w-full"
                            value={current.api_host.clone()}
                        />
                    </div>
                    <div class="form-control w-full">
                        <label class="label"><span class="label-text">{"API Port"}</span></label>
                        <input
                            ref={port_ref}
                            type="number"
                            class="input input-bordered w-full"
                            value={current.api_port.to_string()}
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save & Reload"}</button>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Dashboard Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label">
                            <span class="label-text">{"Auto-refresh interval (ms)"}</span>
                        </label>
                        <input
                            ref={refresh_ref}
                            type="number"
                            min="1000"
                            step="500"
                            class="input input-bordered w-full"
                            value={current.refresh_interval_ms.to_string()}
                        />
                        <label class="label">
                            <span class="label-text-alt text-gray-500">
                                {"Minimum 1000 ms. Applied after reload."}
                            </span>
                        </label>
                    </div>
                </div>
            </div>
        </div>
    }
}
