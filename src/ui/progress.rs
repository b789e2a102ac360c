//! Human-readable deploy progress.

use std::io::{self, Write};
use std::sync::Mutex;

use cutover::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    supports_color: bool,
    supports_unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(supports_color: bool, supports_unicode: bool, verbose: u8) -> Self {
        Self::with_writer(io::stdout(), supports_color, supports_unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        supports_color: bool,
        supports_unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            supports_color,
            supports_unicode,
            verbose,
        }
    }

    fn line(&self, icon: Icon, text: String) -> String {
        format!(
            "{} {}",
            icon.colored(self.supports_color, self.supports_unicode),
            text
        )
    }

    fn dim(&self, text: impl Into<String>) -> String {
        ColoredText::dim(text).render(self.supports_color)
    }

    /// One line per event. Terminal events are left to the summary.
    pub fn format_event(&self, event: &DeployEvent) -> Option<String> {
        let line = match event {
            DeployEvent::Started { release_path, .. } => self.line(
                Icon::Progress,
                format!("New release {}", release_path.display()),
            ),
            DeployEvent::PreviousRelease { path: Some(path) } => self.line(
                Icon::Success,
                format!("Current release {}", path.display()),
            ),
            DeployEvent::PreviousRelease { path: None } => {
                self.line(Icon::Warning, "No current release".to_string())
            }
            DeployEvent::InspectionFailed { message } => self.line(
                Icon::Warning,
                format!("Current release could not be read: {message}"),
            ),
            DeployEvent::GateAnswered { gate, accepted } => {
                if self.verbose == 0 {
                    return None;
                }
                self.line(
                    Icon::Arrow,
                    self.dim(format!(
                        "{}: {}",
                        gate.as_str(),
                        if *accepted { "yes" } else { "no" }
                    )),
                )
            }
            DeployEvent::Cloned { revision } => self.line(
                Icon::Success,
                format!("Cloned revision {}", revision.short()),
            ),
            DeployEvent::QaChecked {
                matched: true,
                ..
            } => self.line(Icon::Success, "Revision matches QA".to_string()),
            DeployEvent::QaChecked {
                matched: false,
                qa_revision: Some(qa),
            } => self.line(
                Icon::Warning,
                format!("QA is running {}", qa.short()),
            ),
            DeployEvent::QaChecked {
                matched: false,
                qa_revision: None,
            } => self.line(Icon::Warning, "QA has no current release".to_string()),
            DeployEvent::ResourceCopied { resource } => {
                self.line(Icon::Success, format!("Copied {resource}"))
            }
            DeployEvent::ResourceSkipped { resource, output } => {
                let mut line = self.line(Icon::Warning, format!("Skipped {resource}"));
                if self.verbose > 0 && !output.trim().is_empty() {
                    line.push_str(&format!(" {}", self.dim(output.trim())));
                }
                line
            }
            DeployEvent::BuildStepCompleted { step } => {
                self.line(Icon::Success, format!("Build {step} finished"))
            }
            DeployEvent::PromotionStepTolerated { step, output } => {
                let mut line = self.line(Icon::Warning, format!("Could not {step}"));
                if self.verbose > 0 && !output.trim().is_empty() {
                    line.push_str(&format!(" {}", self.dim(output.trim())));
                }
                line
            }
            DeployEvent::Promoted { release_path } => self.line(
                Icon::Success,
                format!("current -> {}", release_path.display()),
            ),
            DeployEvent::Completed { .. }
            | DeployEvent::Aborted { .. }
            | DeployEvent::Failed { .. } => return None,
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(line) = self.format_event(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutover::domain::services::{DeployPhase, GateKind};
    use cutover::{RevisionHash, SharedResource};
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn plain(verbose: u8) -> ConsoleEventSink {
        ConsoleEventSink::with_writer(io::sink(), false, false, verbose)
    }

    #[test]
    fn writes_one_line_per_event() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), false, false, 0);

        sink.on_event(DeployEvent::Cloned {
            revision: RevisionHash::new("3f9a1c2e4b5d6f70"),
        });
        sink.on_event(DeployEvent::Promoted {
            release_path: PathBuf::from("/srv/app/qa/releases/20261016_093000"),
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "[OK] Cloned revision 3f9a1c2e4b\n[OK] current -> /srv/app/qa/releases/20261016_093000\n"
        );
    }

    #[test]
    fn terminal_events_are_silent() {
        let sink = plain(0);
        assert!(sink
            .format_event(&DeployEvent::Aborted {
                phase: DeployPhase::PathsResolved,
                reason: "declined".into(),
            })
            .is_none());
    }

    #[test]
    fn gate_answers_need_verbose() {
        let event = DeployEvent::GateAnswered {
            gate: GateKind::ConfirmRelease,
            accepted: true,
        };
        assert!(plain(0).format_event(&event).is_none());
        assert_eq!(
            plain(1).format_event(&event).unwrap(),
            "[>] confirm_release: yes"
        );
    }

    #[test]
    fn skipped_resource_shows_output_when_verbose() {
        let event = DeployEvent::ResourceSkipped {
            resource: SharedResource::new("downloads").unwrap(),
            output: "cp: cannot stat 'downloads'\n".into(),
        };
        assert_eq!(plain(0).format_event(&event).unwrap(), "[WARN] Skipped downloads");
        assert_eq!(
            plain(1).format_event(&event).unwrap(),
            "[WARN] Skipped downloads cp: cannot stat 'downloads'"
        );
    }
}
