use std::error::Error;
use std::io::Write;
use std::sync::{Arc, Weak};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::console::ConsoleSurface;
use crate::cli::session::{HELP, SessionCommand, parse_line};
use crate::model::config::Config;
use crate::ops::store::TaskStore;

/// `tl session`: drive a store from stdin, printing to stdout.
pub fn cmd_session(config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let surface = Arc::new(ConsoleSurface::new(std::io::stdout(), json));
    let mut store = TaskStore::new(config);
    let result = runtime.block_on(run_session(
        BufReader::new(tokio::io::stdin()),
        &surface,
        &mut store,
    ));
    // A stdin read may still be parked on the blocking pool after `quit`
    runtime.shutdown_background();
    result
}

/// Read commands line by line until `quit` or end of input.
///
/// Debounced searches fire between lines. At end of input a still-pending
/// search is awaited so its result is printed; `quit` drops it instead.
pub async fn run_session<R, W>(
    input: R,
    surface: &Arc<ConsoleSurface<W>>,
    store: &mut TaskStore,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let port: Weak<ConsoleSurface<W>> = Arc::downgrade(surface);
    store.attach(port);
    surface.print_count(store);
    surface.print_rows(store);

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(Some(SessionCommand::Quit)) => {
                        store.cancel_search();
                        return Ok(());
                    }
                    Ok(Some(command)) => execute(store, surface, command),
                    Ok(None) => {}
                    Err(e) => surface.print_line(&format!("error: {}", e)),
                }
            }
            _ = store.run_pending_search(), if store.has_pending_search() => {}
        }
    }

    store.run_pending_search().await;
    Ok(())
}

fn execute<W: Write + Send>(
    store: &mut TaskStore,
    surface: &ConsoleSurface<W>,
    command: SessionCommand,
) {
    match command {
        SessionCommand::Add { title, description } => {
            if let Err(e) = store.add_task(title, description) {
                surface.print_line(&format!("error: {}", e));
            }
        }
        SessionCommand::Toggle(index) | SessionCommand::Delete(index)
            if index >= store.task_count() =>
        {
            surface.print_line(&format!("error: no task at index {}", index));
        }
        SessionCommand::Toggle(index) => store.toggle_task(index),
        SessionCommand::Delete(index) => store.delete_task(index),
        SessionCommand::Search(query) => store.search(query),
        SessionCommand::List => surface.print_rows(store),
        SessionCommand::Count => surface.print_count(store),
        SessionCommand::Help => surface.print_line(HELP),
        SessionCommand::Quit => {}
    }
}
