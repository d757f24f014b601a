//! Line-oriented command loop.
//!
//! Reads one command per line, writes one pretty-printed JSON interpretation
//! per command. `exit` or `quit` (any case) ends the loop, as does EOF.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::interpreter::CommandInterpreter;

/// Run the loop until EOF or an exit command. Returns the number of
/// commands interpreted (including ones that failed).
pub async fn run<R, W>(
    interpreter: &CommandInterpreter,
    input: R,
    output: &mut W,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }

        handled += 1;
        let rendered = match interpreter.interpret(text).await {
            Ok(interpretation) => serde_json::to_string_pretty(&interpretation)?,
            Err(e) => {
                tracing::error!(error = %e, text, "command interpretation failed");
                serde_json::to_string_pretty(&serde_json::json!({
                    "text": text,
                    "error": e.to_string(),
                }))?
            }
        };
        output.write_all(format!("{rendered}\n\n").as_bytes()).await?;
        output.flush().await?;
    }

    Ok(handled)
}
