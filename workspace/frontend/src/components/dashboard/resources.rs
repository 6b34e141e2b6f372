use common::{Resource, ResourceGroupKind, ResourceGroups};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub resources: ResourceGroups,
    /// Fired when a card is clicked, with the group it belongs to.
    pub on_open: Callback<(ResourceGroupKind, Resource)>,
}

/// Availability grid: one section per resource group, one card per unit.
/// Clicking a card asks the dashboard to open the record occupying it.
#[function_component(ResourceGrid)]
pub fn resource_grid(props: &Props) -> Html {
    if props.resources.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <p>{"No resources configured yet."}</p>
            </div>
        };
    }

    html! {
        <div class="space-y-6">
            { for props.resources.sections().iter().filter(|(_, items)| !items.is_empty()).map(|(kind, items)| {
                let kind = *kind;
                html! {
                    <div>
                        <h3 class="font-semibold text-sm uppercase text-gray-500 mb-2">{kind.heading()}</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-3">
                            { for items.iter().map(|resource| {
                                let on_click = {
                                    let on_open = props.on_open.clone();
                                    let resource = resource.clone();
                                    Callback::from(move |_| on_open.emit((kind, resource.clone())))
                                };
                                html! {
                                    <ResourceCard resource={resource.clone()} on_click={on_click} />
                                }
                            })}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    resource: Resource,
    on_click: Callback<MouseEvent>,
}

#[function_component(ResourceCard)]
fn resource_card(props: &CardProps) -> Html {
    let resource = &props.resource;
    let status = resource.status;

    html! {
        <button
            class={classes!("card", "bg-base-100", "shadow-sm", "hover:shadow-md", "cursor-pointer", "text-left", status.css_class())}
            onclick={props.on_click.clone()}
        >
            <div class="card-body p-3">
                <p class="font-semibold text-sm">{&resource.name}</p>
                {if let Some(kind) = &resource.kind {
                    html! { <p class="text-xs text-gray-500">{kind}</p> }
                } else {
                    html! {}
                }}
                <span class={classes!(
                    "badge", "badge-sm",
                    if status.is_available() { "badge-success" } else { "badge-error" }
                )}>
                    {status.label()}
                </span>
            </div>
        </button>
    }
}
