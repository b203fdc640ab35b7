use portfolio::{
    MemStorage, NewContactMessage, NewProject, NewSkill, NewUser, ProjectCategory,
    SkillCategory, Storage,
};

fn sample_project() -> NewProject {
    NewProject::new(
        "Portfolio API",
        "The backend for this site.",
        ProjectCategory::Fullstack,
        ["Rust", "axum"],
    )
    .github_url("https://example.com/portfolio")
}

fn sample_message(subject: &str) -> NewContactMessage {
    NewContactMessage {
        name: "Jo".into(),
        email: "a@b.com".into(),
        subject: subject.into(),
        message: "This is a test message.".into(),
    }
}

#[test]
fn unknown_project_is_absent_not_an_error() {
    let store = MemStorage::new();
    assert_eq!(store.get_project(9999).unwrap(), None);
    assert_eq!(store.get_project(0).unwrap(), None);
}

#[test]
fn identical_projects_get_distinct_ids() {
    let store = MemStorage::new();
    let before = store.get_projects().unwrap().len();

    let a = store.create_project(sample_project()).unwrap();
    let b = store.create_project(sample_project()).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.title, b.title);
    assert_eq!(store.get_projects().unwrap().len(), before + 2);
}

#[test]
fn ids_strictly_increase_per_kind() {
    let store = MemStorage::new();

    let mut last = 0;
    for i in 0..5 {
        let skill = store
            .create_skill(NewSkill::new(format!("skill-{i}"), SkillCategory::Tools, 50))
            .unwrap();
        assert!(skill.id > last);
        last = skill.id;
    }

    let mut last = 0;
    for i in 0..5 {
        let message = store.create_contact_message(sample_message(&format!("Subject {i}"))).unwrap();
        assert!(message.id > last);
        last = message.id;
    }
}

#[test]
fn lists_follow_insertion_order() {
    let store = MemStorage::empty();
    for subject in ["First one", "Second one", "Third one"] {
        store.create_contact_message(sample_message(subject)).unwrap();
    }

    let subjects: Vec<_> = store
        .get_contact_messages()
        .unwrap()
        .into_iter()
        .map(|m| m.subject)
        .collect();
    assert_eq!(subjects, ["First one", "Second one", "Third one"]);
}

#[test]
fn created_records_are_readable() {
    let store = MemStorage::new();

    let project = store.create_project(sample_project()).unwrap();
    assert_eq!(project.id, 7);
    assert_eq!(store.get_project(project.id).unwrap(), Some(project));

    let user = store.create_user(NewUser::new("jo", "secret")).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(store.get_user(1).unwrap(), Some(user.clone()));
    assert_eq!(store.get_user_by_username("jo").unwrap(), Some(user));
    assert_eq!(store.get_user(2).unwrap(), None);
}

#[test]
fn contact_message_keeps_fields_and_timestamp() {
    let store = MemStorage::new();
    let created = store.create_contact_message(sample_message("Hello there")).unwrap();

    let stored = store.get_contact_messages().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], created);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].name, "Jo");
    assert_eq!(stored[0].email, "a@b.com");
}

#[test]
fn works_through_a_trait_object() {
    let store: Box<dyn Storage> = Box::new(MemStorage::new());
    assert_eq!(store.get_skills().unwrap().len(), 12);
    let user = store.create_user(NewUser::new("dyn", "pw")).unwrap();
    assert_eq!(store.get_user(user.id).unwrap(), Some(user));
}
