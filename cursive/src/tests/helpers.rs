use std::rc::Rc;

use cursive::{
    view::Nameable,
    views::{Checkbox, EditView, LinearLayout, RadioButton, RadioGroup},
};
use phrasegen::separator::SeparatorClass;

use crate::helpers::{
    get_value_from_input, is_checkbox_checked, is_radio_button_selected, normalize_phrase,
    number_or_previous,
};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(Rc::new(String::from("unit test content"))),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn get_value_from_missing_input() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn is_checkbox_checked_false() {
    let mut siv = cursive::default();
    siv.add_layer(Checkbox::new().with_name("unit_test"));

    assert!(!is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_checkbox_checked_true() {
    let mut siv = cursive::default();
    let mut c_b = Checkbox::new();
    c_b.set_checked(true);
    siv.add_layer(c_b.with_name("unit_test"));

    assert!(is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_radio_button_selected_true() {
    let mut siv = cursive::default();

    let mut rg = RadioGroup::new();
    let button1 = rg
        .button(SeparatorClass::Letters, "b1")
        .with_name("button1_name");
    let button2 = rg
        .button(SeparatorClass::Symbols, "b2")
        .with_name("button2_name");

    let mut ll = LinearLayout::horizontal();
    ll.add_child(button1);
    ll.add_child(button2);

    siv.add_layer(ll);

    siv.call_on_name("button2_name", |e: &mut RadioButton<SeparatorClass>| {
        e.select();
    });

    assert!(!is_radio_button_selected::<SeparatorClass>(
        &mut siv,
        "button1_name"
    ));
    assert!(is_radio_button_selected::<SeparatorClass>(
        &mut siv,
        "button2_name"
    ));
}

#[test]
fn number_or_previous_empty_keeps_previous() {
    assert_eq!(Ok(40), number_or_previous::<i64>("  ", 40));
}

#[test]
fn number_or_previous_parses() {
    assert_eq!(Ok(25), number_or_previous::<i64>(" 25 ", 40));
    assert_eq!(Ok(-3), number_or_previous::<i64>("-3", 40));
}

#[test]
fn number_or_previous_invalid() {
    assert_eq!(Err(40), number_or_previous::<i64>("forty", 40));
    assert_eq!(Err(8), number_or_previous::<usize>("-1", 8));
}

#[test]
fn normalize_phrase_lowercases_and_strips() {
    assert_eq!("correcthorse", normalize_phrase(" Correct Horse\t"));
}
