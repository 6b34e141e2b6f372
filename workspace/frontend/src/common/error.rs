use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Failure panel for a card body whose fetch fell over. The message is the
/// `Err` string from the API client; a transient lounge-server hiccup is the
/// common case, so a retry button is offered whenever the caller can
/// re-issue the fetch.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Rendering fetch failure: {}", props.message);

    let retry_button = props.on_retry.as_ref().map(|on_retry| {
        let on_retry = on_retry.clone();
        html! {
            <button
                class="btn btn-outline btn-sm"
                onclick={Callback::from(move |_| on_retry.emit(()))}
            >
                <i class="fas fa-redo"></i>
                {" Retry"}
            </button>
        }
    });

    html! {
        <div class="flex flex-col items-center gap-3 py-10">
            <div class="alert alert-error max-w-md">
                <i class="fas fa-exclamation-circle text-xl"></i>
                <span>{&props.message}</span>
            </div>
            <p class="text-sm text-gray-500">
                {"Check that the lounge server is reachable, then retry."}
            </p>
            {retry_button}
        </div>
    }
}
