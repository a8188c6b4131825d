use suggest_core::{
    AddressData, AddressFields, AddressSuggestions, Form, SearchRequest, Suggestion,
    SuggestionHooks, SuggestionResponse,
};

fn controller() -> AddressSuggestions {
    AddressSuggestions::new("address", AddressFields::default()).unwrap()
}

fn full_address() -> Suggestion<AddressData> {
    Suggestion::with_data(
        "Россия, Московская обл, Ленинский р-н, г Видное, ул Заводская, д 1",
        AddressData {
            postal_code: Some("142700".to_string()),
            country: Some("Россия".to_string()),
            region_type: Some("обл".to_string()),
            region: Some("Московская".to_string()),
            area_type: Some("р-н".to_string()),
            area: Some("Ленинский".to_string()),
            city_type: Some("г".to_string()),
            city: Some("Видное".to_string()),
            street_type: Some("ул".to_string()),
            street: Some("Заводская".to_string()),
            house_type: Some("д".to_string()),
            house: Some("1".to_string()),
            ..AddressData::default()
        },
    )
}

#[test]
fn selecting_full_address_fills_all_slots_and_composite() {
    let controller = controller();
    let mut form = Form::in_memory();
    controller.init(&mut form);

    let selected = controller.on_select(&mut form, &full_address());
    assert_eq!(
        selected.as_deref(),
        Some("обл Московская, р-н Ленинский, г Видное, ул Заводская, д 1")
    );
    assert_eq!(form.value("address-postal_code"), "142700");
    assert_eq!(form.value("address-region"), "обл Московская");
    assert_eq!(form.value("address-city"), "р-н Ленинский, г Видное");
    assert_eq!(form.value("address-street"), "ул Заводская");
    assert_eq!(form.value("address-house"), "д 1");
    assert_eq!(form.value("address"), selected.unwrap());
}

#[test]
fn next_granular_edit_resyncs_composite_from_distributed_slots() {
    let controller = controller();
    let mut form = Form::in_memory();
    controller.init(&mut form);
    controller.on_select(&mut form, &full_address());

    form.edit("address-house", "д 3");
    assert_eq!(
        form.value("address"),
        "142700, обл Московская, р-н Ленинский, г Видное, ул Заводская, д 3"
    );
}

#[test]
fn label_only_selection_is_a_no_op() {
    let controller = controller();
    let mut form = Form::in_memory();
    controller.init(&mut form);
    form.edit("address-street", "ул Ленина");

    let selected = controller.on_select(&mut form, &Suggestion::label("ул Ленина"));
    assert_eq!(selected, None);
    assert_eq!(form.value("address"), "ул Ленина");
    assert_eq!(form.store().get("address-house"), None);
}

#[test]
fn search_hooks_bias_query_and_trim_results() {
    let controller = controller();
    let request = controller.on_search_start(&SearchRequest::new("Тверская"));
    assert_eq!(request.query, "Москва Тверская");
    assert_eq!(controller.on_search_start(&request), request);

    let response = SuggestionResponse::new(
        (0..10)
            .map(|index| Suggestion::<AddressData>::label(format!("Россия, г Москва, д {index}")))
            .collect(),
    );
    let trimmed = controller.transform_result(&response);
    assert_eq!(trimmed.suggestions.len(), 7);
    assert_eq!(trimmed.suggestions[0].value, "г Москва, д 0");
    assert_eq!(trimmed.suggestions[6].value, "г Москва, д 6");
    assert_eq!(response.suggestions.len(), 10);
}

#[test]
fn format_result_highlights_typed_text_in_street_line() {
    let markup = controller().format_result(&full_address(), "зав");
    assert_eq!(
        markup,
        "<span class=\"autocomplete-suggestion-region\">Московская, р-н Ленинский, г Видное</span>\
         <br>&nbsp;&nbsp;ул <strong>Зав</strong>одская, д 1"
    );
}

#[test]
fn typed_regex_metacharacters_never_act_as_pattern() {
    let markup = controller().format_result(&full_address(), "[з");
    assert!(!markup.contains("<strong>"));
    let markup = controller().format_result(&full_address(), "ул|д");
    assert!(!markup.contains("<strong>"));
}
