use anyhow::Result;
use mindmap_common::{COURSE_DESCRIPTION_ID, COURSE_TITLE_ID, TEACHING_OBJECTIVES_ID};
use mindmap_core::{Form, SubmissionHandler};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, Lines};
use tokio::task::JoinHandle;

const FIELDS: [(&str, &str); 3] = [
    (COURSE_TITLE_ID, "Course title"),
    (COURSE_DESCRIPTION_ID, "Course description"),
    (TEACHING_OBJECTIVES_ID, "Teaching objectives"),
];

/// Prompt for the course fields until end of input. Every complete entry is
/// submitted in the background while the next one is typed.
pub async fn run<R>(reader: R, handler: &SubmissionHandler, form: &Form) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut pending = Vec::new();

    'entries: loop {
        for (id, label) in FIELDS {
            match prompt(&mut lines, label).await? {
                Some(value) => form.set_value(id, value),
                None => break 'entries,
            }
        }
        track(&mut pending, handler.trigger()?);
    }

    if !pending.is_empty() {
        tracing::info!("waiting for {} submission(s)", pending.len());
    }
    crate::wait_all(pending).await;
    Ok(())
}

/// Keep only submissions that are still running, then add `handle`.
fn track(pending: &mut Vec<JoinHandle<()>>, handle: JoinHandle<()>) {
    pending.retain(|h| !h.is_finished());
    pending.push(handle);
}

async fn prompt<R>(lines: &mut Lines<R>, label: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut err = tokio::io::stderr();
    err.write_all(format!("{label}: ").as_bytes()).await?;
    err.flush().await?;
    Ok(lines.next_line().await?)
}
