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

use std::rc::Rc;
use std::str::FromStr;

use cursive::event::Key;
use cursive::views::{Checkbox, Dialog, EditView, OnEventView, RadioButton, TextView};
use cursive::Cursive;

use phrasegen::Error;

pub fn errorbox(ui: &mut Cursive, err: &Error) {
    let d = Dialog::around(TextView::new(format!("{}", err)))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<Rc<String>> {
    let mut value = None;
    s.call_on_name(input_name, |e: &mut EditView| {
        value = Some(e.get_content());
    });
    value
}

pub fn is_checkbox_checked(ui: &mut Cursive, name: &str) -> bool {
    let mut checked = false;
    ui.call_on_name(name, |l: &mut Checkbox| {
        checked = l.is_checked();
    });

    checked
}

pub fn is_radio_button_selected<T: 'static>(ui: &mut Cursive, name: &str) -> bool {
    let mut selected = false;
    ui.call_on_name(name, |e: &mut RadioButton<T>| {
        selected = e.is_selected();
    });

    selected
}

/// Parses a numeric field. An empty field keeps the previous value, so does an invalid one
/// but that is reported as `Err`.
pub fn number_or_previous<T: FromStr>(input: &str, previous: T) -> std::result::Result<T, T> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(previous);
    }

    input.parse::<T>().map_err(|_| previous)
}

/// Personal phrases are stored lowercase without any whitespace.
pub fn normalize_phrase(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
