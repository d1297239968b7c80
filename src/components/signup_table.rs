//! Signup Table Component
//!
//! Paginated table over the fixed in-memory signup list. Page size is 5;
//! navigation clamps by disabling Prev/Next at the edges rather than
//! wrapping.

use leptos::*;

use crate::api::Signup;

/// Rows shown per page
pub const PAGE_SIZE: usize = 5;

/// Number of pages for a row list, never less than 1
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Rows visible on a 1-based page
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// Recent-signups table with Prev/Next paging
#[component]
pub fn SignupTable(rows: Vec<Signup>) -> impl IntoView {
    let (page, set_page) = create_signal(1usize);
    let total = page_count(rows.len());
    let rows_for_view = rows;

    view! {
        <div class="signup-table">
            <table class="w-full">
                <thead>
                    <tr>
                        <th>"Name / Email"</th>
                        <th>"Signup Date"</th>
                        <th>"Source"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        page_slice(&rows_for_view, page.get())
                            .iter()
                            .cloned()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>
                                            <div class="signup-name">{row.name}</div>
                                            <div class="signup-email">{row.email}</div>
                                        </td>
                                        <td>{row.date}</td>
                                        <td>{row.source}</td>
                                        <td>
                                            <span class="status-pill">{row.status}</span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <div class="table-pager">
                <div>{move || format!("Page {} of {}", page.get(), total)}</div>
                <div class="pager-buttons">
                    <button
                        disabled=move || page.get() == 1
                        on:click=move |_| set_page.update(|p| *p -= 1)
                    >
                        "Prev"
                    </button>
                    <button
                        disabled=move || page.get() == total
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn twelve_rows_make_three_pages() {
        assert_eq!(page_count(12), 3);
        assert_eq!(page_slice(&rows(12), 1), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&rows(12), 2), &[6, 7, 8, 9, 10]);
        assert_eq!(page_slice(&rows(12), 3), &[11, 12]);
    }

    #[test]
    fn empty_rows_still_have_one_page() {
        assert_eq!(page_count(0), 1);
        assert!(page_slice(&rows(0), 1).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        assert_eq!(page_count(10), 2);
        assert_eq!(page_slice(&rows(10), 2), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        assert!(page_slice(&rows(12), 4).is_empty());
    }
}
