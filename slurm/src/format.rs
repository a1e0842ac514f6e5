//! Render API results as fixed-width text tables.
//!
//! Both listing subcommands share one renderer: column widths grow to the
//! widest cell, header cells are centered, data cells follow a per-column
//! alignment, and a pagination summary line follows the table.

use std::cmp::min;

use slurm_common::prelude::*;

/// The canonical rendering of a missing field value.
const ABSENT: &str = "None";

/// The fixed gap between adjacent columns.
const COLUMN_GAP: &str = "   ";

/// How a column's data cells should be padded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Split the padding between both sides, favoring the right.
    Center,
    /// Pad on the left.
    Right,
}

/// Render `rows` under `headers` as a fixed-width text table.
///
/// Each column is as wide as its widest cell, header included. Header cells
/// are always centered; data cells follow `aligns`. A separator line of `=`
/// runs the full table width. The result has no trailing newline.
pub fn render_table(headers: &[String], rows: &[Vec<String>], aligns: &[Align]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(Some(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let total_width: usize =
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(headers, &widths, |_| Align::Center));
    lines.push("=".repeat(total_width));
    for row in rows {
        lines.push(render_row(row, &widths, |i| aligns[i]));
    }
    lines.join("\n")
}

/// Render one line of the table, padding each cell to its column width.
fn render_row<F>(cells: &[String], widths: &[usize], align_for: F) -> String
where
    F: Fn(usize) -> Align,
{
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| pad(cell, widths[i], align_for(i)))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

/// Pad `cell` with spaces to `width` according to `align`.
fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    match align {
        Align::Left => format!("{}{}", cell, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), cell),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), cell, " ".repeat(fill - left))
        }
    }
}

/// Format a page of users as a table plus a pagination summary.
///
/// User listings take no offset, so the summary always starts at 0.
pub fn format_users(result: &ListResult<User>) -> String {
    let headers = vec![
        "id".to_owned(),
        "username".to_owned(),
        "created_at".to_owned(),
    ];
    let rows: Vec<Vec<String>> = result
        .data
        .iter()
        .map(|user| {
            vec![
                user.id.to_string(),
                user.username.clone(),
                user.created_at.clone(),
            ]
        })
        .collect();
    let table = render_table(&headers, &rows, &[Align::Right, Align::Left, Align::Right]);

    let total = result.meta.total_count;
    format!("{}\n{}", table, page_summary(0, total, total))
}

/// Format a page of jobs as a table plus a pagination summary reflecting
/// the requested `offset` and `limit`.
///
/// Durations arrive in seconds and are shown in minutes. Null durations and
/// member counts render as the absence marker; the division is skipped
/// entirely, never performed on a placeholder.
pub fn format_jobs(result: &ListResult<Job>, offset: u64, limit: u64) -> String {
    let headers = vec![
        "id".to_owned(),
        "name".to_owned(),
        "owner".to_owned(),
        "member_count".to_owned(),
        "duration (min)".to_owned(),
        "status".to_owned(),
        "created_at".to_owned(),
    ];
    let rows: Vec<Vec<String>> = result
        .data
        .iter()
        .map(|job| {
            vec![
                job.id.to_string(),
                job.name.clone(),
                job.owner.clone(),
                display_count(job.member_count),
                display_minutes(job.duration),
                job.status.to_string(),
                job.created_at.clone(),
            ]
        })
        .collect();
    let table = render_table(
        &headers,
        &rows,
        &[
            Align::Right,
            Align::Left,
            Align::Left,
            Align::Right,
            Align::Right,
            Align::Center,
            Align::Right,
        ],
    );

    let total = result.meta.total_count;
    let start = min(offset, total);
    let end = min(offset.saturating_add(limit), total);
    format!("{}\n{}", table, page_summary(start, end, total))
}

/// The `"{start} - {end} of {total}"` line printed under every table.
fn page_summary(start: u64, end: u64, total: u64) -> String {
    format!("{} - {} of {}", start, end, total)
}

/// Display an optional count, falling back to the absence marker.
fn display_count(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => ABSENT.to_owned(),
    }
}

/// Display an optional duration in seconds as minutes, falling back to the
/// absence marker.
fn display_minutes(duration: Option<f64>) -> String {
    match duration {
        Some(seconds) => (seconds / 60.0).to_string(),
        None => ABSENT.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATED_AT: &str = "2019-01-01T01:00:00+00:00";

    fn user_page(data: Vec<User>, total_count: u64) -> ListResult<User> {
        ListResult {
            data,
            meta: Meta { total_count },
        }
    }

    fn job_page(data: Vec<Job>, total_count: u64) -> ListResult<Job> {
        ListResult {
            data,
            meta: Meta { total_count },
        }
    }

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_owned(),
            created_at: CREATED_AT.to_owned(),
        }
    }

    fn job(
        id: i64,
        name: &str,
        member_count: Option<i64>,
        duration: Option<f64>,
        status: Status,
    ) -> Job {
        Job {
            id,
            name: name.to_owned(),
            owner: "owner@test.com".to_owned(),
            member_count,
            duration,
            status,
            created_at: CREATED_AT.to_owned(),
        }
    }

    #[test]
    fn format_users_empty() {
        let result = format_users(&user_page(vec![], 0));
        assert_eq!(
            result,
            concat!(
                "id   username   created_at\n",
                "==========================\n",
                "0 - 0 of 0",
            )
        );
    }

    #[test]
    fn format_users_aligns_and_reports_totals() {
        let page = user_page(vec![user(1, "user1@test.com"), user(11, "user2@test.com")], 2);
        let result = format_users(&page);
        assert_eq!(
            result,
            concat!(
                "id      username             created_at        \n",
                "===============================================\n",
                " 1   user1@test.com   2019-01-01T01:00:00+00:00\n",
                "11   user2@test.com   2019-01-01T01:00:00+00:00\n",
                "0 - 2 of 2",
            )
        );
    }

    #[test]
    fn format_jobs_empty() {
        let result = format_jobs(&job_page(vec![], 0), 0, 0);
        assert_eq!(
            result,
            concat!(
                "id   name   owner   member_count   duration (min)   status   created_at\n",
                "=======================================================================\n",
                "0 - 0 of 0",
            )
        );
    }

    #[test]
    fn format_jobs_converts_seconds_to_minutes() {
        let page = job_page(
            vec![
                job(1, "job1", Some(3000), Some(120.0), Status::Done),
                job(11, "job2", Some(3000), Some(30.0), Status::Done),
            ],
            2,
        );
        let result = format_jobs(&page, 0, 10);
        assert_eq!(
            result,
            concat!(
                "id   name       owner        member_count   duration (min)   status          created_at        \n",
                "===============================================================================================\n",
                " 1   job1   owner@test.com           3000                2    done    2019-01-01T01:00:00+00:00\n",
                "11   job2   owner@test.com           3000              0.5    done    2019-01-01T01:00:00+00:00\n",
                "0 - 2 of 2",
            )
        );
    }

    #[test]
    fn format_jobs_renders_null_duration_as_absent() {
        let page = job_page(vec![job(1, "job1", Some(3000), None, Status::Queued)], 1);
        let result = format_jobs(&page, 0, 10);
        assert_eq!(
            result,
            concat!(
                "id   name       owner        member_count   duration (min)   status          created_at        \n",
                "===============================================================================================\n",
                " 1   job1   owner@test.com           3000             None   queued   2019-01-01T01:00:00+00:00\n",
                "0 - 1 of 1",
            )
        );
    }

    #[test]
    fn format_jobs_renders_null_member_count_as_absent() {
        let page = job_page(vec![job(1, "job1", None, Some(60.0), Status::Done)], 1);
        let result = format_jobs(&page, 0, 10);
        assert_eq!(
            result,
            concat!(
                "id   name       owner        member_count   duration (min)   status          created_at        \n",
                "===============================================================================================\n",
                " 1   job1   owner@test.com           None                1    done    2019-01-01T01:00:00+00:00\n",
                "0 - 1 of 1",
            )
        );
    }

    #[test]
    fn format_jobs_page_summary_reflects_offset() {
        let result = format_jobs(&job_page(vec![], 100), 1, 10);
        assert!(result.ends_with("1 - 11 of 100"));
    }

    #[test]
    fn format_jobs_page_summary_clamps_to_total() {
        let result = format_jobs(&job_page(vec![], 100), 150, 10);
        assert!(result.ends_with("100 - 100 of 100"));
    }

    #[test]
    fn render_table_sizes_columns_to_the_widest_cell() {
        let headers = vec!["a".to_owned(), "b".to_owned()];
        let rows = vec![vec!["wide value".to_owned(), "x".to_owned()]];
        let table = render_table(&headers, &rows, &[Align::Left, Align::Right]);
        assert_eq!(
            table,
            concat!(
                "    a        b\n",
                "==============\n",
                "wide value   x",
            )
        );
    }

    #[test]
    fn center_padding_favors_the_right() {
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad("ab", 2, Align::Center), "ab");
    }
}
