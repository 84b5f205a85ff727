//! Create and edit form of a garden and its sectors.

use dioxus::prelude::*;
use store::form::{error_for, SubmitMode};
use store::{GardenForm, RoleCode};
use ui::components::{Button, ButtonVariant, Card, Field};
use ui::icons::{FaPlus, FaTrashCan};
use ui::{
    busy, notify_success, report_error, use_api, use_notifications, BackButton, ConfirmDialog,
    Icon, SectorField, SectorFieldset, SUCCESS_MESSAGE,
};

use super::RequireRole;

const DELETE_GARDEN_QUESTION: &str = "¿Desea eliminar la huerta? La acción no tiene vuelta atrás";

#[component]
pub fn GardenNew() -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::GardenManager],
            GardenDetail { mode: SubmitMode::Create }
        }
    }
}

#[component]
pub fn GardenEdit(id: String) -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::GardenManager],
            GardenDetail { key: "{id}", mode: SubmitMode::from_route(Some(&id)) }
        }
    }
}

#[component]
fn GardenDetail(mode: SubmitMode) -> Element {
    let api = use_api();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut form = use_signal(GardenForm::new);
    let mut submitted = use_signal(|| false);
    let mut confirming_delete = use_signal(|| false);
    let loading = use_signal(|| mode.is_update());
    let submitting = use_signal(|| false);

    let load_mode = mode.clone();
    use_hook(move || {
        if let Some(id) = load_mode.id().map(str::to_string) {
            spawn(async move {
                let _busy = busy(loading);
                match api.client().gardens().fetch_one(&id).await {
                    Ok(garden) => form.set(GardenForm::from(&garden)),
                    Err(e) => report_error(&mut notices, &e),
                }
            });
        }
    });

    let submit_mode = mode.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        if !form.read().validate().is_empty() {
            return;
        }
        let mode = submit_mode.clone();
        let draft = form.peek().clone();
        spawn(async move {
            let _busy = busy(submitting);
            match api.client().gardens().save(&mode, &draft).await {
                Ok(()) => {
                    notify_success(&mut notices, SUCCESS_MESSAGE);
                    nav.go_back();
                }
                Err(e) => report_error(&mut notices, &e),
            }
        });
    };

    let delete_id = mode.id().map(str::to_string);
    let on_delete = move |_: ()| {
        confirming_delete.set(false);
        let Some(id) = delete_id.clone() else {
            return;
        };
        spawn(async move {
            let _busy = busy(submitting);
            match api.client().gardens().delete(&id).await {
                Ok(()) => {
                    notify_success(&mut notices, SUCCESS_MESSAGE);
                    nav.go_back();
                }
                Err(e) => report_error(&mut notices, &e),
            }
        });
    };

    let on_add_sector = move |_: MouseEvent| {
        if let Err(e) = form.write().add_sector() {
            tracing::warn!("{e}");
        }
    };

    let on_sector_change = move |(index, field, value): (usize, SectorField, String)| {
        let mut form = form.write();
        match form.sector_mut(index) {
            Ok(sector) => match field {
                SectorField::Name => sector.name = value,
                SectorField::Crops => sector.crops = value,
            },
            Err(e) => tracing::warn!("{e}"),
        }
    };

    let on_remove_sector = move |index: usize| {
        if let Err(e) = form.write().remove_sector(index) {
            tracing::warn!("{e}");
        }
    };

    let current = form();
    let errors = if submitted() { current.validate() } else { Vec::new() };
    let name_error = error_for(&errors, "name").map(str::to_string);
    let description_error = error_for(&errors, "description").map(str::to_string);
    let location_error = error_for(&errors, "location").map(str::to_string);
    let title = if mode.is_update() { "Editar huerta" } else { "Nueva huerta" };
    let is_update = mode.is_update();

    rsx! {
        Card {
            title: rsx! { "{title}" },
            actions: rsx! {
                BackButton {}
                if is_update {
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: submitting(),
                        onclick: move |_| confirming_delete.set(true),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                        " Eliminar"
                    }
                }
            },
            loading: loading(),
            form {
                onsubmit: on_submit,
                Field {
                    id: "garden-name",
                    label: "Nombre",
                    value: current.name.clone(),
                    error: name_error,
                    oninput: move |value: String| form.write().name = value,
                }
                Field {
                    id: "garden-description",
                    label: "Descripción",
                    value: current.description.clone(),
                    error: description_error,
                    oninput: move |value: String| form.write().description = value,
                }
                Field {
                    id: "garden-location",
                    label: "Ubicación",
                    value: current.location.clone(),
                    error: location_error,
                    oninput: move |value: String| form.write().location = value,
                }

                h4 { "Sectores" }
                for (index, key, sector) in current.sectors().iter().enumerate().map(|(i, s)| (i, s.centralizer_key().to_string(), s.clone())) {
                    SectorFieldset {
                        key: "{key}",
                        index,
                        sector,
                        errors: errors.clone(),
                        on_change: on_sector_change,
                        on_remove: on_remove_sector,
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !current.can_add_sector(),
                    onclick: on_add_sector,
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " Agregar sector"
                }

                div {
                    class: "form-actions",
                    Button { r#type: "submit", loading: submitting(), "Guardar" }
                }
            }
        }

        if confirming_delete() {
            ConfirmDialog {
                question: DELETE_GARDEN_QUESTION.to_string(),
                on_confirm: on_delete,
                on_cancel: move |_| confirming_delete.set(false),
            }
        }
    }
}
