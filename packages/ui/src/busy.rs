use dioxus::prelude::*;
use store::Pending;

/// Raise `flag` until the returned guard is dropped.
///
/// The flag is left alone if its component unmounted in the meantime.
///
/// ```ignore
/// let _busy = busy(submitting);
/// api.client().gardens().save(&mode, &form).await?;
/// ```
pub fn busy(mut flag: Signal<bool>) -> Pending<impl FnMut(bool)> {
    Pending::begin(move |value| {
        if let Ok(mut current) = flag.try_write() {
            *current = value;
        }
    })
}
