use dioxus::prelude::*;
use shared_types::PaginatedResponse;

/// Steps `page` back to the last page when a refetch lands past the end,
/// e.g. after the only row on the last page was approved or withdrawn.
pub fn use_page_clamp<T: 'static, E: 'static>(
    results: Resource<Result<PaginatedResponse<T>, E>>,
    mut page: Signal<i64>,
) {
    use_effect(move || {
        let last = match &*results.read() {
            Some(Ok(found)) => found.overshoot(),
            _ => None,
        };
        if let Some(last) = last {
            page.set(last);
        }
    });
}
