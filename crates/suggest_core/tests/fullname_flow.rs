use suggest_core::{
    Form, FullnameData, FullnameFields, FullnameSuggestions, Suggestion, SuggestionHooks,
};

fn controller() -> FullnameSuggestions {
    FullnameSuggestions::new("fullname", FullnameFields::default()).unwrap()
}

#[test]
fn selection_without_patronymic_leaves_patronymic_untouched() {
    let controller = controller();
    let mut form = Form::in_memory();
    controller.init(&mut form);
    form.edit("fullname-patronymic", "Петрович");

    let suggestion = Suggestion::with_data(
        "Иванов Иван",
        FullnameData {
            surname: Some("Иванов".to_string()),
            name: Some("Иван".to_string()),
            ..FullnameData::default()
        },
    );
    let selected = controller.on_select(&mut form, &suggestion);

    assert_eq!(selected.as_deref(), Some("Иванов Иван"));
    assert_eq!(form.value("fullname-surname"), "Иванов");
    assert_eq!(form.value("fullname-name"), "Иван");
    assert_eq!(form.value("fullname-patronymic"), "Петрович");
}

#[test]
fn composite_uses_space_separator() {
    let controller = controller();
    let mut form = Form::in_memory();
    controller.init(&mut form);

    form.edit("fullname-name", "Анна");
    form.edit("fullname-surname", "Петрова");
    assert_eq!(form.value("fullname"), "Петрова Анна");
}

#[test]
fn decoded_service_payload_drives_selection() {
    let raw = r#"{
        "value": "Сидоров Пётр Ильич",
        "unrestricted_value": "Сидоров Пётр Ильич",
        "data": {"surname": "Сидоров", "name": "Пётр", "patronymic": "Ильич", "gender": "MALE", "source": null, "qc": "0"}
    }"#;
    let suggestion = Suggestion::<FullnameData>::from_json(raw).unwrap();
    let controller = controller();
    let mut form = Form::in_memory();
    controller.init(&mut form);

    controller.on_select(&mut form, &suggestion);
    assert_eq!(form.value("fullname"), "Сидоров Пётр Ильич");
    assert_eq!(form.store().entries().count(), 4);
}
