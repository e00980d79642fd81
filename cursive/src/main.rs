/*  Phrasegen - a generator of memorable passphrases
    Copyright (C) 2026 The Phrasegen developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::path::PathBuf;
use std::process;
use std::{thread, time};

use cursive::direction::Orientation;
use cursive::event::Key;
use cursive::traits::*;
use cursive::views::{
    Checkbox, Dialog, EditView, LinearLayout, OnEventView, RadioGroup, SelectView, TextView,
};
use cursive::Cursive;

use clipboard::{ClipboardContext, ClipboardProvider};

use phrasegen::corpus::WordCorpus;
use phrasegen::separator::SeparatorClass;
use phrasegen::settings::{read_config, save_config, Settings};
use phrasegen::Error;

mod helpers;

/// Everything the dialogs share, stored as the user data of the `Cursive` root.
pub struct AppState {
    corpus: WordCorpus,
    settings: Settings,
    settings_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Generate,
    Options,
    Exit,
}

fn set_status(ui: &mut Cursive, message: &str) {
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(message);
    });
}

fn current_settings(ui: &mut Cursive) -> Option<Settings> {
    ui.with_user_data(|state: &mut AppState| state.settings.clone())
}

fn copy(ui: &mut Cursive, passphrase: &str) {
    if let Err(err) = || -> phrasegen::Result<()> {
        let mut ctx: ClipboardContext = ClipboardProvider::new()?;
        ctx.set_contents(passphrase.to_owned())?;
        Ok(())
    }() {
        helpers::errorbox(ui, &err);
        return;
    }

    thread::spawn(|| {
        thread::sleep(time::Duration::from_secs(40));
        let ctx: Result<ClipboardContext, _> = ClipboardProvider::new();
        match ctx {
            Ok(mut ctx) => {
                if let Err(err) = ctx.set_contents("".to_string()) {
                    log::warn!("failed to clear the copy buffer: {}", err);
                }
            }
            Err(err) => log::warn!("failed to open the copy buffer: {}", err),
        }
    });
    set_status(ui, "Copied passphrase to copy buffer for 40 seconds");
}

fn generate(ui: &mut Cursive) {
    let generated = ui.with_user_data(|state: &mut AppState| {
        phrasegen::generate_passphrase(&state.corpus, &state.settings)
    });
    let passphrase = match generated {
        Some(Ok(passphrase)) => passphrase,
        Some(Err(err)) => {
            helpers::errorbox(ui, &err);
            return;
        }
        None => return,
    };

    let copy_passphrase = passphrase.clone();
    let d = Dialog::around(
        LinearLayout::new(Orientation::Vertical)
            .child(TextView::new("Your password is:"))
            .child(TextView::new(passphrase).with_name("passphrase")),
    )
    .title("Passphrase")
    .button("Copy", move |s| copy(s, &copy_passphrase))
    .button("Another", |s| {
        s.pop_layer();
        generate(s);
    })
    .dismiss_button("Back");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

fn separator_button_name(class: SeparatorClass) -> String {
    format!("separator_{}", class)
}

/// Reads the options dialog into a new `Settings` value. Numeric fields that don't parse keep
/// their previous value, the returned list names them.
fn settings_from_options(ui: &mut Cursive, previous: &Settings) -> (Settings, Vec<&'static str>) {
    let mut invalid = vec![];

    let char_limit_input = helpers::get_value_from_input(ui, "char_limit_input")
        .map(|s| s.to_string())
        .unwrap_or_default();
    let char_limit = helpers::number_or_previous(&char_limit_input, previous.char_limit)
        .unwrap_or_else(|previous| {
            invalid.push("character limit");
            previous
        });

    let word_count_input = helpers::get_value_from_input(ui, "word_count_input")
        .map(|s| s.to_string())
        .unwrap_or_default();
    // word counts are stored as toml integers
    let word_count = helpers::number_or_previous(&word_count_input, previous.word_count)
        .and_then(|count| {
            if i64::try_from(count).is_ok() {
                Ok(count)
            } else {
                Err(previous.word_count)
            }
        })
        .unwrap_or_else(|previous| {
            invalid.push("word count");
            previous
        });

    let personal_phrase = helpers::get_value_from_input(ui, "personal_phrase_input")
        .map(|s| helpers::normalize_phrase(&s))
        .unwrap_or_else(|| previous.personal_phrase.clone());

    let separator = SeparatorClass::ALL
        .into_iter()
        .find(|class| {
            helpers::is_radio_button_selected::<SeparatorClass>(ui, &separator_button_name(*class))
        })
        .unwrap_or(previous.separator);

    let settings = previous
        .clone()
        .with_char_limit(char_limit)
        .with_capitalize(helpers::is_checkbox_checked(ui, "capital_letters"))
        .with_personal_phrase(&personal_phrase)
        .with_word_count(word_count)
        .with_separator(separator);

    (settings, invalid)
}

/// Replaces the stored settings with the content of the options dialog.
fn apply_options(ui: &mut Cursive) -> Option<Settings> {
    let previous = current_settings(ui)?;
    let (settings, invalid) = settings_from_options(ui, &previous);

    if !invalid.is_empty() {
        set_status(
            ui,
            &format!("Invalid input, keeping the previous {}", invalid.join(" and ")),
        );
    }
    log::debug!("options changed: {:?}", settings);

    let stored = settings.clone();
    ui.with_user_data(|state: &mut AppState| state.settings = stored);
    Some(settings)
}

fn save_options(ui: &mut Cursive) {
    let settings = match apply_options(ui) {
        Some(settings) => settings,
        None => return,
    };
    let path = match ui.with_user_data(|state: &mut AppState| state.settings_path.clone()) {
        Some(path) => path,
        None => return,
    };

    match save_config(&settings, &path) {
        Ok(()) => set_status(ui, &format!("Saved options to {}", path.display())),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn labeled(label: &str, view: impl View) -> LinearLayout {
    LinearLayout::horizontal()
        .child(TextView::new(label).fixed_width(28))
        .child(view)
}

fn options(ui: &mut Cursive) {
    let settings = match current_settings(ui) {
        Some(settings) => settings,
        None => return,
    };

    let mut capital_letters = Checkbox::new();
    capital_letters.set_checked(settings.capitalize);

    let mut separator_group: RadioGroup<SeparatorClass> = RadioGroup::new();
    let mut separators = LinearLayout::vertical();
    for class in SeparatorClass::ALL {
        separators.add_child(
            separator_group
                .button(class, class.label())
                .with_name(separator_button_name(class)),
        );
    }

    let fields = LinearLayout::vertical()
        .child(TextView::new(
            "Let's setup your password options, leave a field as it is to keep its value.\n",
        ))
        .child(labeled(
            "Maximum number of characters",
            EditView::new()
                .content(settings.char_limit.to_string())
                .with_name("char_limit_input")
                .fixed_width(10),
        ))
        .child(labeled(
            "Capital letters",
            capital_letters.with_name("capital_letters"),
        ))
        .child(labeled(
            "Personal phrase",
            EditView::new()
                .content(settings.personal_phrase.clone())
                .with_name("personal_phrase_input")
                .fixed_width(30),
        ))
        .child(labeled(
            "Number of words",
            EditView::new()
                .content(settings.word_count.to_string())
                .with_name("word_count_input")
                .fixed_width(10),
        ))
        .child(labeled("Space type", separators));

    let d = Dialog::around(fields)
        .title("Options")
        .button("Generate", |s| {
            if apply_options(s).is_some() {
                s.pop_layer();
                generate(s);
            }
        })
        .button("Save", |s| {
            save_options(s);
        })
        .dismiss_button("Cancel");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);

    ui.call_on_name(
        &separator_button_name(settings.separator),
        |e: &mut cursive::views::RadioButton<SeparatorClass>| {
            e.select();
        },
    );
}

fn menu_choice(ui: &mut Cursive, choice: &MenuChoice) {
    match choice {
        MenuChoice::Generate => generate(ui),
        MenuChoice::Options => options(ui),
        MenuChoice::Exit => ui.quit(),
    }
}

fn main_menu() -> LinearLayout {
    let choices = SelectView::<MenuChoice>::new()
        .item("1. Generate Password", MenuChoice::Generate)
        .item("2. Options", MenuChoice::Options)
        .item("3. Exit", MenuChoice::Exit)
        .on_submit(menu_choice)
        .with_name("menu");

    LinearLayout::new(Orientation::Vertical)
        .child(Dialog::around(choices).title("Menu").fixed_width(40))
        .child(
            LinearLayout::new(Orientation::Horizontal)
                .child(TextView::new("Esc: Quit | "))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        )
}

fn help() {
    println!("A generator of memorable passphrases built from dictionary words.");
    println!();
    println!("The dictionary is a JSON object with the words as keys, it's read from");
    println!("words_dictionary.json or the file the PHRASEGEN_WORDS environment variable points at.");
    println!("Options are stored in $XDG_CONFIG_HOME/phrasegen/settings.toml.");
}

fn load_corpus(settings: &Settings) -> WordCorpus {
    match WordCorpus::from_json_file(&settings.words_path) {
        Ok(corpus) => corpus,
        Err(Error::Io(err)) => {
            eprintln!(
                "Error: The file {} was not found: {}",
                settings.words_path.display(),
                err
            );
            process::exit(1);
        }
        Err(Error::Json(_)) => {
            eprintln!("Error: Failed to decode JSON from the file.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 if args[1] == "-h" || args[1] == "--help" => {
            help();
            process::exit(0);
        }
        _ => {
            eprintln!("Unknown argument, usage: phrasegen-cursive [-h|--help]");
            process::exit(1);
        }
    }

    let (config, settings_path) = {
        let words_path = std::env::var("PHRASEGEN_WORDS").ok();
        let home = std::env::var("HOME").ok().map(PathBuf::from);
        let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);

        match read_config(&words_path, &home, &xdg_config_home) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Error {}", err);
                process::exit(1);
            }
        }
    };
    let settings = match Settings::from_config(&config) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };
    let corpus = load_corpus(&settings);

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        eprintln!("Error loading theme: {:?}", err);
        process::exit(1);
    }

    ui.set_user_data(AppState {
        corpus,
        settings,
        settings_path,
    });

    ui.add_global_callback(Key::Esc, |s| s.quit());
    ui.add_layer(main_menu());

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
