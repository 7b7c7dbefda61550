//! # btpair-page-leptos
//!
//! The pairing page in the browser: a client-side rendered Leptos app that
//! drives [`PageController`] with a same-origin [`GlooBackend`] and draws
//! whatever view the controller renders.
//!
//! Element ids and region classes match the server-side page markup so
//! existing stylesheets keep working.

use std::rc::Rc;

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use btpair_app::services::page_controller::PageController;
use btpair_domain::device::DeviceKey;
use btpair_domain::form::FormField;
use btpair_domain::view::{FORM_ID, PINCODE_ID, PageView, Region, SELECT_ID, STATUS_ID};

pub mod api;
mod renderer;

use api::GlooBackend;
use renderer::SignalRenderer;

type Controller = PageController<GlooBackend, SignalRenderer>;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(PageView::default());
    let controller = StoredValue::new_local(Rc::new(Controller::new(
        GlooBackend::same_origin(),
        SignalRenderer::new(set_page),
    )));

    let ctrl = controller.get_value();
    spawn_local(async move {
        ctrl.load().await;
    });

    let hidden = move |region: Region| move || !page.with(|p| p.is_visible(region));

    let on_select = move |ev: Event| {
        let key = DeviceKey::new(event_target_value(&ev));
        controller.with_value(|c| c.select_device(key));
    };
    let on_edit = move |field: FormField| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            controller.with_value(|c| c.edit_field(field, value));
        }
    };
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let ctrl = controller.get_value();
        spawn_local(async move {
            ctrl.submit().await;
        });
    };

    let options = move || {
        page.with(|p| {
            p.options
                .iter()
                .map(|option| {
                    let selected = p.selected.as_deref() == Some(option.value.as_str());
                    view! {
                        <option value=option.value.clone() selected=selected>
                            {option.label.clone()}
                        </option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <main>
            <div class={Region::RegistrationRow.name()} hidden={hidden(Region::RegistrationRow)}>
                <span>"Pincode: "</span>
                <span id=PINCODE_ID>{move || page.with(|p| p.pincode.clone().unwrap_or_default())}</span>
                <span>" Status: "</span>
                <span id=STATUS_ID>{move || page.with(|p| p.status.clone().unwrap_or_default())}</span>
            </div>
            <div class={Region::BeforeSubmit.name()} hidden={hidden(Region::BeforeSubmit)}>
                <form id=FORM_ID on:submit=on_submit>
                    <select id=SELECT_ID name="bt_addr" on:change=on_select>
                        {options}
                    </select>
                    <div id={Region::ServiceGroup.name()} hidden={hidden(Region::ServiceGroup)}>
                        <label>"Service"</label>
                        <input type="text" name="service" on:change=on_edit(FormField::Service)/>
                    </div>
                    <div id={Region::ProtoportGroup.name()} hidden={hidden(Region::ProtoportGroup)}>
                        <label>"Protocol:port"</label>
                        <input type="text" name="protoport" on:change=on_edit(FormField::Protoport)/>
                    </div>
                    <button type="submit">"Connect"</button>
                </form>
            </div>
            <p id={Region::NoDevicesMessage.name()} hidden={hidden(Region::NoDevicesMessage)}>
                "No pairable devices found."
            </p>
            <p id={Region::SubmitMessage.name()} hidden={hidden(Region::SubmitMessage)}>
                "Connection request sent."
            </p>
        </main>
    }
}
