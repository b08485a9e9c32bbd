use indicatif::{ProgressBar, ProgressStyle};
use polyforge::engine::progress::{Progress, ProgressCallback};

/// Renders engine progress events as an indicatif bar on stderr.
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0).with_style(Self::bar_style());
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        Self { pb }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::CycleStart {
                cycle,
                total_residues,
            } => {
                pb.reset();
                pb.set_length(total_residues);
                pb.set_position(0);
                if cycle == 0 {
                    pb.set_message("Placing monomers");
                } else {
                    pb.set_message(format!("Placing monomers (cycle {})", cycle + 1));
                }
            }
            Progress::ResiduePlaced => {
                pb.inc(1);
            }
            Progress::CycleAbandoned { cycle } => {
                pb.println(format!(
                    "  cycle {} abandoned: placement budget exhausted",
                    cycle + 1
                ));
            }
            Progress::Finished { residues, atoms } => {
                pb.finish_with_message(format!("Placed {} residues ({} atoms)", residues, atoms));
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<32} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create progress bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_tracks_cycle_and_placement_events() {
        let handler = CliProgressHandler::new();
        let callback = handler.callback();

        callback(Progress::CycleStart {
            cycle: 0,
            total_residues: 3,
        });
        assert_eq!(handler.pb.length(), Some(3));
        assert_eq!(handler.pb.position(), 0);

        callback(Progress::ResiduePlaced);
        callback(Progress::ResiduePlaced);
        assert_eq!(handler.pb.position(), 2);

        callback(Progress::Finished {
            residues: 3,
            atoms: 9,
        });
        assert!(handler.pb.is_finished());
    }

    #[test]
    fn restarts_reset_the_bar() {
        let handler = CliProgressHandler::new();
        let callback = handler.callback();

        callback(Progress::CycleStart {
            cycle: 0,
            total_residues: 2,
        });
        callback(Progress::ResiduePlaced);
        callback(Progress::CycleAbandoned { cycle: 0 });
        callback(Progress::CycleStart {
            cycle: 1,
            total_residues: 2,
        });

        assert_eq!(handler.pb.position(), 0);
        assert_eq!(handler.pb.message(), "Placing monomers (cycle 2)");
    }
}
