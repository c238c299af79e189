use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use portfolio_cms::entities::reorder::OrderUpdate;
use portfolio_cms::entities::skill::{
    NewSkill, Skill, SkillCategory, SkillInsert, UpdateProficiencyRequest, UpdateSkillRequest,
};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::skills::SkillRepository;
use portfolio_cms::use_cases::skills::SkillHandler;

mock! {
    pub SkillRepo {}

    #[async_trait::async_trait]
    impl SkillRepository for SkillRepo {
        async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
        async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError>;
        async fn max_order_in_category(&self, category: SkillCategory) -> Result<Option<i32>, AppError>;
        async fn insert_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
        async fn update_skill(&self, id: &Uuid, patch: &UpdateSkillRequest) -> Result<Skill, AppError>;
        async fn set_skill_order(&self, id: &Uuid, sort_order: i32) -> Result<(), AppError>;
        async fn toggle_study(&self, id: &Uuid) -> Result<Skill, AppError>;
        async fn update_study_notes(&self, id: &Uuid, notes: &str) -> Result<Skill, AppError>;
        async fn update_proficiency(&self, id: &Uuid, proficiency: i16) -> Result<Skill, AppError>;
        async fn study_list(&self) -> Result<Vec<Skill>, AppError>;
        async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
        async fn count_by_category(&self) -> Result<Vec<(SkillCategory, i64)>, AppError>;
        async fn top_skills(&self, limit: i64) -> Result<Vec<Skill>, AppError>;
    }
}

fn skill_from_insert(insert: &SkillInsert) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        category: insert.category,
        sort_order: insert.sort_order,
        proficiency: insert.proficiency,
        to_study: insert.to_study,
        study_notes: insert.study_notes.clone(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn new_skill(name: &str, category: SkillCategory) -> NewSkill {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "category": category,
    }))
    .unwrap()
}

#[tokio::test]
async fn create_appends_to_end_of_category() {
    let mut repo = MockSkillRepo::new();

    repo.expect_max_order_in_category()
        .with(eq(SkillCategory::Backend))
        .returning(|_| Ok(Some(4)));

    repo.expect_insert_skill()
        .withf(|insert: &SkillInsert| insert.sort_order == 5 && insert.proficiency == 100)
        .returning(|insert| Ok(skill_from_insert(insert)));

    let handler = SkillHandler::new(repo);
    let skill = handler
        .create_skill(new_skill("Rust", SkillCategory::Backend))
        .await
        .unwrap();

    assert_eq!(skill.sort_order, 5);
    assert_eq!(skill.proficiency, 100);
    assert!(!skill.to_study);
    assert_eq!(skill.study_notes, "");
}

#[tokio::test]
async fn create_in_empty_category_starts_at_one() {
    let mut repo = MockSkillRepo::new();

    repo.expect_max_order_in_category()
        .with(eq(SkillCategory::Devops))
        .returning(|_| Ok(None));

    repo.expect_insert_skill()
        .withf(|insert: &SkillInsert| insert.sort_order == 1)
        .returning(|insert| Ok(skill_from_insert(insert)));

    let handler = SkillHandler::new(repo);
    let skill = handler
        .create_skill(new_skill("Terraform", SkillCategory::Devops))
        .await
        .unwrap();

    assert_eq!(skill.sort_order, 1);
}

#[tokio::test]
async fn create_with_explicit_order_skips_lookup() {
    let mut repo = MockSkillRepo::new();

    repo.expect_max_order_in_category().never();

    repo.expect_insert_skill()
        .withf(|insert: &SkillInsert| insert.sort_order == 2)
        .returning(|insert| Ok(skill_from_insert(insert)));

    let request: NewSkill = serde_json::from_value(serde_json::json!({
        "name": "React",
        "category": "frontend",
        "order": 2
    }))
    .unwrap();

    let handler = SkillHandler::new(repo);
    let skill = handler.create_skill(request).await.unwrap();

    assert_eq!(skill.sort_order, 2);
}

#[tokio::test]
async fn create_rejects_out_of_range_proficiency_before_any_mutation() {
    let mut repo = MockSkillRepo::new();
    repo.expect_max_order_in_category().never();
    repo.expect_insert_skill().never();

    let request: NewSkill = serde_json::from_value(serde_json::json!({
        "name": "Rust",
        "category": "backend",
        "proficiency": 150
    }))
    .unwrap();

    let handler = SkillHandler::new(repo);
    let result = handler.create_skill(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn update_proficiency_rejects_zero_without_touching_repo() {
    let mut repo = MockSkillRepo::new();
    repo.expect_update_proficiency().never();

    let handler = SkillHandler::new(repo);
    let result = handler
        .update_proficiency(
            &Uuid::new_v4(),
            UpdateProficiencyRequest { proficiency: 0 },
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn reorder_reports_per_item_outcomes_without_rollback() {
    let known_a = Uuid::new_v4();
    let unknown = Uuid::new_v4();
    let known_b = Uuid::new_v4();

    let mut repo = MockSkillRepo::new();
    repo.expect_set_skill_order()
        .with(eq(known_a), eq(1))
        .times(1)
        .returning(|_, _| Ok(()));
    repo.expect_set_skill_order()
        .with(eq(unknown), eq(2))
        .times(1)
        .returning(|_, _| Err(AppError::NotFound("Skill not found".into())));
    repo.expect_set_skill_order()
        .with(eq(known_b), eq(3))
        .times(1)
        .returning(|_, _| Ok(()));

    let updates: Vec<OrderUpdate> = serde_json::from_value(serde_json::json!([
        { "id": known_a, "order": 1 },
        { "id": unknown, "order": 2 },
        { "id": known_b, "order": 3 },
    ]))
    .unwrap();

    let handler = SkillHandler::new(repo);
    let report = handler.reorder_skills(updates).await.unwrap();

    assert_eq!(report.applied, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.results.len(), 3);
    assert!(report.results[0].ok);
    assert!(!report.results[1].ok);
    // The item after the failure was still applied.
    assert!(report.results[2].ok);
}

#[tokio::test]
async fn grouped_view_omits_empty_categories() {
    let frontend = skill_from_insert(&SkillInsert {
        name: "React".into(),
        category: SkillCategory::Frontend,
        sort_order: 1,
        proficiency: 90,
        to_study: false,
        study_notes: String::new(),
    });
    let devops = skill_from_insert(&SkillInsert {
        name: "Docker".into(),
        category: SkillCategory::Devops,
        sort_order: 1,
        proficiency: 70,
        to_study: true,
        study_notes: "volumes, networking".into(),
    });

    let mut repo = MockSkillRepo::new();
    let skills = vec![frontend, devops];
    repo.expect_list_skills()
        .returning(move || Ok(skills.clone()));

    let handler = SkillHandler::new(repo);
    let grouped = handler.grouped_by_category().await.unwrap();

    assert_eq!(grouped.len(), 2);
    assert!(grouped.contains_key(&SkillCategory::Frontend));
    assert!(grouped.contains_key(&SkillCategory::Devops));
    // No backend skills, so no backend key at all.
    assert!(!grouped.contains_key(&SkillCategory::Backend));
}

#[tokio::test]
async fn toggle_study_twice_round_trips() {
    let id = Uuid::new_v4();
    let base = skill_from_insert(&SkillInsert {
        name: "Kubernetes".into(),
        category: SkillCategory::Devops,
        sort_order: 1,
        proficiency: 60,
        to_study: false,
        study_notes: String::new(),
    });

    let mut repo = MockSkillRepo::new();
    let mut flipped = base.to_study;
    repo.expect_toggle_study()
        .with(eq(id))
        .times(2)
        .returning(move |_| {
            flipped = !flipped;
            let mut skill = base.clone();
            skill.to_study = flipped;
            Ok(skill)
        });

    let handler = SkillHandler::new(repo);
    let once = handler.toggle_study(&id).await.unwrap();
    let twice = handler.toggle_study(&id).await.unwrap();

    assert!(once.to_study);
    assert_eq!(twice.to_study, false);
}
