//! Command-line operations run against an [`ActivityBoard`].

use clap::Subcommand;

use crate::app::board::{ActivityBoard, LoadOutcome, MutationStatus};
use crate::error::{ErrorKind, Result};
use crate::interface::{ActivityApi, Confirm, Surface};
use crate::view::RowKey;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every activity with its participants
    List,
    /// Sign EMAIL up for ACTIVITY
    Signup { email: String, activity: String },
    /// Remove EMAIL from ACTIVITY
    Unregister {
        email: String,
        activity: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

impl Command {
    pub fn assume_yes(&self) -> bool {
        matches!(self, Command::Unregister { yes: true, .. })
    }
}

/// Runs one command. A load failure only stops `list` and `unregister`;
/// signup goes to the server whatever the list showed.
pub async fn run<A, S>(board: &ActivityBoard<A, S>, command: Command) -> Result<()>
where
    A: ActivityApi,
    S: Surface + Confirm + Send + Sync + 'static,
{
    let loaded = board.load().await;

    let status = match command {
        Command::List => {
            return match loaded {
                LoadOutcome::Failed => Err(ErrorKind::LoadError.into()),
                _ => Ok(()),
            };
        }
        Command::Signup { email, activity } => board.signup(&email, &activity).await,
        Command::Unregister {
            email, activity, ..
        } => {
            // Removal goes through the row table, which only a rendered load fills.
            if loaded != LoadOutcome::Rendered {
                return Err(ErrorKind::LoadError.into());
            }
            board.remove_row(&RowKey::new(activity, email)).await
        }
    };

    match status {
        MutationStatus::Applied => Ok(()),
        MutationStatus::Cancelled => {
            log::info!("Nothing changed");
            Ok(())
        }
        MutationStatus::Rejected | MutationStatus::Failed => {
            let text = board
                .notice()
                .await
                .map(|n| n.text)
                .unwrap_or_else(|| format!("{status:?}"));
            Err(ErrorKind::MutationError(text).into())
        }
    }
}
