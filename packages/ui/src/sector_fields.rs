use dioxus::prelude::*;
use store::form::{error_for, FieldError};
use store::SectorDraft;

use crate::clipboard::copy_to_clipboard;
use crate::components::{Button, ButtonVariant, Field};
use crate::confirm::ConfirmDialog;
use crate::icons::{FaCopy, FaTrashCan};
use crate::notifications::use_notifications;
use crate::Icon;

const DELETE_SECTOR_QUESTION: &str = "¿Desea eliminar el sector? La acción no tiene vuelta atrás";
const CENTRALIZER_HELP: &str = "Esta clave deberá ser programada en la placa de la huerta inteligente";

/// Which text field of a sector row changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SectorField {
    Name,
    Crops,
}

fn sector_error(errors: &[FieldError], index: usize, field: &str) -> Option<String> {
    error_for(errors, &format!("sectors.{index}.{field}")).map(str::to_string)
}

/// Inputs of one sector inside the garden form.
///
/// `errors` is the whole form's error list; only the `sectors.{index}.*`
/// entries are shown here.
#[component]
pub fn SectorFieldset(
    index: usize,
    sector: SectorDraft,
    errors: Vec<FieldError>,
    on_change: EventHandler<(usize, SectorField, String)>,
    on_remove: EventHandler<usize>,
) -> Element {
    let notices = use_notifications();
    let mut confirming = use_signal(|| false);

    let key = sector.centralizer_key().to_string();
    let copied_key = key.clone();
    let number = index + 1;
    let name_error = sector_error(&errors, index, "name");
    let crops_error = sector_error(&errors, index, "crops");
    let key_error = sector_error(&errors, index, "centralizerKey");

    rsx! {
        fieldset {
            class: "sector-fieldset",
            div {
                class: "sector-fieldset-header",
                legend { "Sector {number}" }
                Button {
                    variant: ButtonVariant::Danger,
                    title: "Eliminar sector",
                    onclick: move |_| confirming.set(true),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
            Field {
                id: format!("sector-{index}-name"),
                label: "Nombre",
                value: sector.name.clone(),
                error: name_error,
                oninput: move |value: String| on_change.call((index, SectorField::Name, value)),
            }
            Field {
                id: format!("sector-{index}-crops"),
                label: "Cultivos",
                value: sector.crops.clone(),
                error: crops_error,
                help: "Separados por coma".to_string(),
                oninput: move |value: String| on_change.call((index, SectorField::Crops, value)),
            }
            Field {
                id: format!("sector-{index}-centralizer-key"),
                label: "Clave del centralizador",
                value: key.clone(),
                readonly: true,
                error: key_error,
                help: CENTRALIZER_HELP.to_string(),
                addon: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        title: "Copiar",
                        onclick: move |_| {
                            spawn(copy_to_clipboard(notices, copied_key.clone()));
                        },
                        Icon { icon: FaCopy, width: 14, height: 14 }
                    }
                },
            }
        }

        if confirming() {
            ConfirmDialog {
                question: DELETE_SECTOR_QUESTION.to_string(),
                on_confirm: move |_| {
                    confirming.set(false);
                    on_remove.call(index);
                },
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::form::REQUIRED_SECTOR_FIELD;
    use store::{Garden, GardenForm, Sector};

    use super::*;

    #[test]
    fn blank_server_key_is_reported_on_its_row() {
        let garden = Garden {
            name: "Huerta".to_string(),
            description: "Patio".to_string(),
            location: "Rosario".to_string(),
            sectors: vec![
                Sector {
                    name: "A".to_string(),
                    crops: "tomate".to_string(),
                    centralizer_key: "ab".repeat(32),
                    ..Sector::default()
                },
                Sector {
                    name: "B".to_string(),
                    crops: "lechuga".to_string(),
                    ..Sector::default()
                },
            ],
            ..Garden::default()
        };
        let errors = GardenForm::from(&garden).validate();

        assert_eq!(sector_error(&errors, 0, "centralizerKey"), None);
        assert_eq!(
            sector_error(&errors, 1, "centralizerKey").as_deref(),
            Some(REQUIRED_SECTOR_FIELD)
        );
        assert_eq!(sector_error(&errors, 1, "name"), None);
    }
}
