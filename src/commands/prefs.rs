//! Prefs command - show and save per-user preferences

use anyhow::bail;

use crate::cli::PrefsAction;
use sbgrader::output::{OperationResult, OutputMode};
use sbgrader::prefs::{UserPrefs, find_user, update_prefs};

/// Show or save a user's preferences
pub fn prefs_cmd(action: PrefsAction, output_mode: OutputMode) -> anyhow::Result<()> {
    match action {
        PrefsAction::Show { user, prefs_file } => {
            let Some(prefs) = find_user(&prefs_file, &user)? else {
                bail!("no saved preferences for {:?} in {}", user, prefs_file.display());
            };
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&prefs)?);
            } else {
                println!("User: {}", prefs.user);
                println!("Grade function: {}", prefs.function);
                println!("D is a valid grade: {}", prefs.d_is_valid);
                println!("Train mode: {}", prefs.train_mode);
            }
            Ok(())
        },
        PrefsAction::Set {
            user,
            function,
            d_is_valid,
            train_mode,
            prefs_file,
        } => {
            // Start from the saved line so an unset flag keeps its value
            let mut prefs = if prefs_file.exists() {
                find_user(&prefs_file, &user)?.unwrap_or_else(|| UserPrefs::new(&user))
            } else {
                UserPrefs::new(&user)
            };
            if let Some(function) = function {
                prefs.function = function.parse()?;
            }
            if let Some(d_is_valid) = d_is_valid {
                prefs.d_is_valid = d_is_valid;
            }
            if let Some(train_mode) = train_mode {
                prefs.train_mode = train_mode;
            }
            update_prefs(&prefs, &prefs_file)?;

            let result = OperationResult {
                success: true,
                message: format!("Saved preferences for {}: {}", prefs.user, prefs.to_line()),
            };
            result.render(output_mode);
            Ok(())
        },
    }
}
