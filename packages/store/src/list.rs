//! Loading state of list screens and the scoped busy flag used around calls.

use std::future::Future;

use crate::models::PaginatedList;

/// Sets a busy flag on creation and clears it when dropped.
///
/// Hold one for the duration of an async call so that every exit path,
/// including early returns and `?`, ends the loading state.
pub struct Pending<F: FnMut(bool)> {
    set_busy: F,
}

impl<F: FnMut(bool)> Pending<F> {
    pub fn begin(mut set_busy: F) -> Self {
        set_busy(true);
        Self { set_busy }
    }
}

impl<F: FnMut(bool)> Drop for Pending<F> {
    fn drop(&mut self) {
        (self.set_busy)(false);
    }
}

/// Items and loading flag of one list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub page: PaginatedList<T>,
    pub loading: bool,
}

impl<T> Default for ListState<T> {
    /// Screens start in the loading state, since they fetch on mount.
    fn default() -> Self {
        Self {
            page: PaginatedList::default(),
            loading: true,
        }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Store the outcome of a fetch and end loading.
    ///
    /// On failure the list is emptied and the error handed back for reporting.
    pub fn finish<E>(&mut self, result: Result<PaginatedList<T>, E>) -> Option<E> {
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = page;
                None
            }
            Err(e) => {
                self.page = PaginatedList::default();
                Some(e)
            }
        }
    }

    /// `begin`, await `fetch`, then `finish`.
    pub async fn load<E, Fut>(&mut self, fetch: Fut) -> Option<E>
    where
        Fut: Future<Output = Result<PaginatedList<T>, E>>,
    {
        self.begin();
        let result = fetch.await;
        self.finish(result)
    }

    pub fn items(&self) -> &[T] {
        &self.page.list
    }
}
