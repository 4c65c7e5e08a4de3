//! Interactive, line-based entry flow
//!
//! Walks the wizard one step at a time over any reader and writer, so the
//! same code serves a terminal and tests. End of input, or `q` at any
//! choice prompt, abandons the log without saving anything.

use crate::application::{Decision, EntryPresenter, EntryWizard};
use crate::domain::{DraftEntry, EnergyLevel, Intervention, Mood, WizardStep};
use crate::error::Result;
use crate::infrastructure::RecordStore;
use std::io::{BufRead, Write};

enum Answer {
    Line(String),
    Quit,
}

pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractivePrompt { input, output }
    }

    /// Read one answer; `q` or `quit` abandons
    fn ask(&mut self, prompt: &str) -> Result<Answer> {
        self.read_answer(prompt, true)
    }

    /// Read free text; only end of input abandons
    fn ask_text(&mut self, prompt: &str) -> Result<Answer> {
        self.read_answer(prompt, false)
    }

    fn read_answer(&mut self, prompt: &str, quit_words: bool) -> Result<Answer> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Answer::Quit);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if quit_words && matches!(line.trim(), "q" | "quit") {
            return Ok(Answer::Quit);
        }
        Ok(Answer::Line(line))
    }

    fn header(&mut self, step: WizardStep) -> Result<()> {
        writeln!(self.output, "\n{}  {}", step, step.title())?;
        Ok(())
    }

    fn choose_mood(&mut self) -> Result<Option<Mood>> {
        self.header(WizardStep::MoodSelect)?;
        for mood in Mood::all() {
            writeln!(self.output, "  {}) {}", mood.value(), mood.label())?;
        }

        loop {
            let Answer::Line(line) = self.ask("Mood [1-5]: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<Mood>() {
                Ok(mood) => return Ok(Some(mood)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn choose_energy(&mut self, current: EnergyLevel) -> Result<Option<EnergyLevel>> {
        for level in EnergyLevel::all() {
            writeln!(
                self.output,
                "  {}) {:<9} {}",
                level.value(),
                level.label(),
                level.description()
            )?;
        }

        let prompt = format!("Energy [1-5, Enter keeps {}]: ", current.label());
        loop {
            let Answer::Line(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(current));
            }
            match line.trim().parse::<EnergyLevel>() {
                Ok(level) => return Ok(Some(level)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn choose_sleep(&mut self, draft: &DraftEntry) -> Result<Option<f64>> {
        let prompt = format!("Hours slept [0-12, Enter keeps {}]: ", draft.sleep());
        loop {
            let Answer::Line(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(draft.sleep().hours()));
            }
            match line.trim().trim_end_matches('h').parse::<f64>() {
                Ok(hours) if hours.is_finite() => return Ok(Some(hours)),
                _ => writeln!(self.output, "Please enter a number of hours, e.g. 7.5")?,
            }
        }
    }

    fn print_interventions(&mut self, draft: &DraftEntry) -> Result<()> {
        for (i, item) in Intervention::CATALOG.iter().enumerate() {
            let mark = if draft.interventions().contains(*item) {
                'x'
            } else {
                ' '
            };
            writeln!(self.output, "  [{}] {}) {}", mark, i + 1, item.name())?;
        }
        Ok(())
    }

    fn parse_intervention(token: &str) -> Option<Intervention> {
        match token.parse::<usize>() {
            Ok(n) => Intervention::CATALOG.get(n.checked_sub(1)?).copied(),
            Err(_) => token.parse().ok(),
        }
    }

    fn print_summary(&mut self, draft: &DraftEntry) -> Result<()> {
        self.header(WizardStep::Summary)?;
        let mood = draft.mood().map(Mood::label).unwrap_or("-");
        writeln!(self.output, "  Mood:          {}", mood)?;
        writeln!(self.output, "  Energy:        {}", draft.energy().label())?;
        writeln!(self.output, "  Sleep:         {}", draft.sleep())?;

        let items: Vec<&str> = draft.interventions().iter().map(Intervention::name).collect();
        let items = if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        };
        writeln!(self.output, "  Interventions: {}", items)?;
        writeln!(self.output, "  Notes:         {}", draft.notes().unwrap_or("-"))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> EntryPresenter for InteractivePrompt<R, W> {
    fn collect<S: RecordStore + ?Sized>(
        &mut self,
        wizard: &mut EntryWizard<'_, S>,
    ) -> Result<Decision> {
        writeln!(
            self.output,
            "Daily log for {} (q to quit)",
            wizard.context().entry_date.format("%A, %b %-d")
        )?;

        let Some(mood) = self.choose_mood()? else {
            return Ok(Decision::Abandon);
        };
        wizard.select_mood(mood);

        self.header(WizardStep::EnergySleep)?;
        let Some(energy) = self.choose_energy(wizard.draft().energy())? else {
            return Ok(Decision::Abandon);
        };
        wizard.set_energy(energy);
        let Some(hours) = self.choose_sleep(wizard.draft())? else {
            return Ok(Decision::Abandon);
        };
        wizard.set_sleep(hours);
        wizard.advance();

        self.header(WizardStep::Interventions)?;
        loop {
            self.print_interventions(wizard.draft())?;
            let Answer::Line(line) =
                self.ask("Toggle by number or name, comma separated (Enter to continue): ")?
            else {
                return Ok(Decision::Abandon);
            };
            if line.trim().is_empty() {
                break;
            }
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                match Self::parse_intervention(token) {
                    Some(item) => wizard.toggle_intervention(item),
                    None => writeln!(self.output, "Unknown intervention: '{}'", token)?,
                }
            }
        }
        wizard.advance();

        self.header(WizardStep::Notes)?;
        let Answer::Line(notes) = self.ask_text("Notes (Enter to skip): ")? else {
            return Ok(Decision::Abandon);
        };
        wizard.set_notes(&notes);
        wizard.advance();

        self.print_summary(wizard.draft())?;
        loop {
            let Answer::Line(line) = self.ask("Complete log? [Y/n]: ")? else {
                return Ok(Decision::Abandon);
            };
            match line.trim().to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(Decision::Submit),
                "n" | "no" => return Ok(Decision::Abandon),
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }
}
