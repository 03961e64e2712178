//! Menu-driven session: one search at a time, with filters, readings and
//! units adjustable in between without re-querying.

use std::fmt;

use inquire::{InquireError, MultiSelect, Select, Text};
use weather_core::{
    Config, Field, TemperatureUnit, TemperatureVariant, Unit, Variant, WeatherQuery, WindUnit,
    WindVariant, provider_from_config,
};

use crate::cli::print_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    Parameters,
    ClearFilters,
    TemperatureReading,
    WindReading,
    TempUnit,
    WindSpeedUnit,
    Quit,
}

impl Action {
    const fn all() -> &'static [Action] {
        &[
            Action::Search,
            Action::Parameters,
            Action::ClearFilters,
            Action::TemperatureReading,
            Action::WindReading,
            Action::TempUnit,
            Action::WindSpeedUnit,
            Action::Quit,
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Search => "Search a city",
            Action::Parameters => "Customize parameters",
            Action::ClearFilters => "Clear filters",
            Action::TemperatureReading => "Temperature reading",
            Action::WindReading => "Wind reading",
            Action::TempUnit => "Temperature unit",
            Action::WindSpeedUnit => "Wind unit",
            Action::Quit => "Quit",
        })
    }
}

/// How a single menu action ended, when it did not simply complete.
#[derive(Debug)]
enum Flow {
    /// Ctrl-C at any prompt ends the session cleanly.
    Quit,
    Failed(InquireError),
}

/// Map a skippable prompt result so that an interrupt reads as [`Flow::Quit`].
fn skippable<T>(answer: Result<Option<T>, InquireError>) -> Result<Option<T>, Flow> {
    match answer {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationInterrupted) => Err(Flow::Quit),
        Err(e) => Err(Flow::Failed(e)),
    }
}

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let zone = config.display_zone()?;
    let mut query = WeatherQuery::new(provider_from_config(config)?);

    loop {
        let action = match skippable(
            Select::new("What next?", Action::all().to_vec()).prompt_skippable(),
        ) {
            Ok(Some(Action::Quit)) | Ok(None) | Err(Flow::Quit) => break,
            Ok(Some(action)) => action,
            Err(Flow::Failed(e)) => return Err(e.into()),
        };

        match handle(action, &mut query).await {
            Ok(()) => print_view(&query, &zone),
            Err(Flow::Quit) => break,
            Err(Flow::Failed(e)) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Run one menu action. Esc on a sub-prompt returns to the menu unchanged.
async fn handle(action: Action, query: &mut WeatherQuery) -> Result<(), Flow> {
    match action {
        Action::Search => {
            let Some(input) = skippable(Text::new("City:").prompt_skippable())? else {
                return Ok(());
            };
            let fields = query.selection().fields().clone();
            if let Ok(None) = query.search(&input, fields).await {
                println!("Please enter a city name.");
            }
        }
        Action::Parameters => {
            let selection = query.selection_mut();
            let defaults: Vec<usize> = Field::all()
                .iter()
                .enumerate()
                .filter(|(_, f)| selection.is_selected(**f))
                .map(|(i, _)| i)
                .collect();

            let chosen = skippable(
                MultiSelect::new("Parameters:", Field::all().to_vec())
                    .with_default(&defaults)
                    .prompt_skippable(),
            )?;

            if let Some(chosen) = chosen {
                for field in Field::all() {
                    if chosen.contains(field) != selection.is_selected(*field) {
                        selection.toggle_field(*field);
                    }
                }
            }
        }
        Action::ClearFilters => {
            // The outcome lands in the query's view.
            let _ = query.clear_filters().await;
        }
        Action::TemperatureReading => {
            let choice = skippable(
                Select::new("Temperature reading:", TemperatureVariant::all().to_vec())
                    .prompt_skippable(),
            )?;
            if let Some(v) = choice {
                query.selection_mut().select_variant(Variant::Temperature(v));
            }
        }
        Action::WindReading => {
            let choice =
                skippable(Select::new("Wind reading:", WindVariant::all().to_vec()).prompt_skippable())?;
            if let Some(v) = choice {
                query.selection_mut().select_variant(Variant::Wind(v));
            }
        }
        Action::TempUnit => {
            let choice = skippable(
                Select::new("Temperature unit:", TemperatureUnit::all().to_vec()).prompt_skippable(),
            )?;
            query.selection_mut().change_unit(choice.map(Unit::Temperature));
        }
        Action::WindSpeedUnit => {
            let choice =
                skippable(Select::new("Wind unit:", WindUnit::all().to_vec()).prompt_skippable())?;
            query.selection_mut().change_unit(choice.map(Unit::Wind));
        }
        Action::Quit => return Err(Flow::Quit),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answered_and_skipped_prompts_pass_through() {
        assert!(matches!(skippable(Ok(Some(3))), Ok(Some(3))));
        assert!(matches!(skippable::<u8>(Ok(None)), Ok(None)));
    }

    #[test]
    fn interrupt_in_any_prompt_quits() {
        let flow = skippable::<String>(Err(InquireError::OperationInterrupted));
        assert!(matches!(flow, Err(Flow::Quit)));
    }

    #[test]
    fn other_prompt_errors_are_failures() {
        let flow = skippable::<String>(Err(InquireError::NotTTY));
        assert!(matches!(flow, Err(Flow::Failed(InquireError::NotTTY))));
    }

    #[test]
    fn menu_lists_quit_last() {
        assert_eq!(Action::all().last(), Some(&Action::Quit));
        assert_eq!(Action::ClearFilters.to_string(), "Clear filters");
    }
}
