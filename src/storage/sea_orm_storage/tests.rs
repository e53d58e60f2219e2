use super::SeaOrmStorage;
use crate::grading::build_report;
use crate::models::activities::requests::{
    AttachmentInput, CreateActivityRequest, SubmitActivityRequest,
};
use crate::models::assessments::{
    entities::AssessmentType,
    requests::{CreateAssessmentConfigRequest, ScoreQuery, UpsertScoreRequest},
};
use crate::models::classes::requests::ClassPayload;
use crate::models::lessons::{entities::LessonType, requests::NewLesson};
use crate::models::teaching_assignments::requests::CreateTeachingAssignmentRequest;
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use crate::storage::{LessonFilter, Storage};
use chrono::NaiveDate;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::connect("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory database should open")
}

async fn user(storage: &SeaOrmStorage, email: &str, role: UserRole, class_id: Option<i64>) -> User {
    storage
        .create_user(CreateUserRequest {
            full_name: email.split('@').next().unwrap().to_string(),
            email: email.to_string(),
            password: "hash".to_string(),
            role,
            class_id,
        })
        .await
        .unwrap()
}

async fn class(storage: &SeaOrmStorage, name: &str) -> i64 {
    storage
        .create_class(ClassPayload {
            name: name.to_string(),
            grade_level: "9º ano".to_string(),
            year: 2025,
            shift: "Matutino".to_string(),
        })
        .await
        .unwrap()
        .id
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn score_request(
    student_id: i64,
    class_id: i64,
    subject_id: i64,
    ty: AssessmentType,
    value: f64,
) -> UpsertScoreRequest {
    UpsertScoreRequest {
        student_id,
        class_id,
        subject_id,
        unit: 1,
        assessment_type: ty,
        value,
        note: None,
    }
}

#[actix_web::test]
async fn test_build_database_url() {
    assert_eq!(
        SeaOrmStorage::build_database_url(":memory:").unwrap(),
        "sqlite::memory:"
    );
    assert_eq!(
        SeaOrmStorage::build_database_url("agenda.db").unwrap(),
        "sqlite://agenda.db?mode=rwc"
    );
    assert!(SeaOrmStorage::build_database_url("postgres://u:p@localhost/agenda").is_ok());
    assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
}

#[actix_web::test]
async fn test_duplicate_email_is_conflict() {
    let storage = storage().await;
    user(&storage, "ana@escola.test", UserRole::Student, None).await;

    let err = storage
        .create_user(CreateUserRequest {
            full_name: "Outra Ana".into(),
            email: "ana@escola.test".into(),
            password: "hash".into(),
            role: UserRole::Teacher,
            class_id: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "unexpected error: {err}");
}

#[actix_web::test]
async fn test_class_only_kept_for_students() {
    let storage = storage().await;
    let class_id = class(&storage, "9A").await;
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, Some(class_id)).await;
    assert_eq!(teacher.class_id, None);

    let student = user(&storage, "aluno@escola.test", UserRole::Student, Some(class_id)).await;
    assert_eq!(student.class_id, Some(class_id));

    // 非学生不能分配班级
    assert!(
        storage
            .assign_student_class(teacher.id, Some(class_id))
            .await
            .unwrap()
            .is_none()
    );
    let moved = storage
        .assign_student_class(student.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.class_id, None);
}

#[actix_web::test]
async fn test_class_counts_and_restricted_delete() {
    let storage = storage().await;
    let a = class(&storage, "9A").await;
    let b = class(&storage, "8B").await;
    user(&storage, "s1@escola.test", UserRole::Student, Some(a)).await;
    user(&storage, "s2@escola.test", UserRole::Student, Some(a)).await;

    let classes = storage.list_classes_with_counts().await.unwrap();
    assert_eq!(classes.len(), 2);
    // 按名称排序
    assert_eq!(classes[0].class.name, "8B");
    assert_eq!(classes[0].student_count, 0);
    assert_eq!(classes[1].student_count, 2);
    assert_eq!(storage.count_students_in_class(a).await.unwrap(), 2);

    let err = storage.delete_class(a).await.unwrap_err();
    assert!(err.is_foreign_key(), "unexpected error: {err}");

    assert!(storage.delete_class(b).await.unwrap());
    assert!(!storage.delete_class(b).await.unwrap());
}

#[actix_web::test]
async fn test_delete_class_referenced_by_lesson_is_foreign_key() {
    let storage = storage().await;
    let class_id = class(&storage, "7C").await;
    let subject = storage.create_subject("História").await.unwrap();
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, None).await;
    storage
        .create_lesson(NewLesson {
            class_id,
            teacher_id: teacher.id,
            subject_id: subject.id,
            date: date("2025-04-02"),
            time: chrono::NaiveTime::parse_from_str("10:00", "%H:%M").unwrap(),
            topic: "Brasil Colônia".into(),
            lesson_type: LessonType::Theory,
        })
        .await
        .unwrap();

    assert_eq!(storage.count_students_in_class(class_id).await.unwrap(), 0);
    let err = storage.delete_class(class_id).await.unwrap_err();
    assert!(err.is_foreign_key(), "unexpected error: {err}");
    assert!(storage.get_class_by_id(class_id).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_score_upsert_keeps_single_row() {
    let storage = storage().await;
    let class_id = class(&storage, "9A").await;
    let subject = storage.create_subject("Matemática").await.unwrap();
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, None).await;
    let student = user(&storage, "aluno@escola.test", UserRole::Student, Some(class_id)).await;

    let first = storage
        .upsert_score(
            teacher.id,
            score_request(student.id, class_id, subject.id, AssessmentType::Exam, 6.0),
            date("2025-04-01"),
        )
        .await
        .unwrap();

    let mut again = score_request(student.id, class_id, subject.id, AssessmentType::Exam, 9.5);
    again.note = Some("recuperação".into());
    let second = storage
        .upsert_score(teacher.id, again, date("2025-04-10"))
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.value, 9.5);
    assert_eq!(second.note.as_deref(), Some("recuperação"));
    assert_eq!(second.recorded_on, date("2025-04-10"));

    let rows = storage.list_scores_for_student(student.id).await.unwrap();
    assert_eq!(rows.len(), 1);

    let listed = storage
        .list_scores(
            teacher.id,
            ScoreQuery {
                class_id,
                subject_id: subject.id,
                unit: 1,
                assessment_type: AssessmentType::Exam,
            },
        )
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].student_name, "aluno");
}

#[actix_web::test]
async fn test_report_inputs_feed_aggregator() {
    let storage = storage().await;
    let class_id = class(&storage, "9A").await;
    let math = storage.create_subject("Matemática").await.unwrap();
    let art = storage.create_subject("Artes").await.unwrap();
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, None).await;
    let student = user(&storage, "aluno@escola.test", UserRole::Student, Some(class_id)).await;

    for subject_id in [math.id, art.id] {
        storage
            .create_teaching_assignment(CreateTeachingAssignmentRequest {
                teacher_id: teacher.id,
                class_id,
                subject_id,
            })
            .await
            .unwrap();
    }

    for (ty, weight) in [
        (AssessmentType::Exam, 40),
        (AssessmentType::Activity, 30),
        (AssessmentType::Project, 30),
    ] {
        storage
            .create_config(
                teacher.id,
                CreateAssessmentConfigRequest {
                    class_id,
                    subject_id: math.id,
                    unit: 1,
                    assessment_type: ty,
                    weight,
                },
            )
            .await
            .unwrap();
    }

    for (ty, value) in [(AssessmentType::Exam, 8.5), (AssessmentType::Activity, 9.0)] {
        storage
            .upsert_score(
                teacher.id,
                score_request(student.id, class_id, math.id, ty, value),
                date("2025-04-01"),
            )
            .await
            .unwrap();
    }

    let subjects = storage.list_subjects_for_class(class_id).await.unwrap();
    let configs = storage.list_active_configs_for_class(class_id).await.unwrap();
    let scores = storage.list_scores_for_student(student.id).await.unwrap();
    assert_eq!(subjects.len(), 2);
    assert_eq!(configs.len(), 3);

    let report = build_report(&subjects, &configs, &scores);
    assert_eq!(report[0].subject_name, "Artes");
    assert!(report[0].units.is_empty());
    assert_eq!(report[1].subject_name, "Matemática");
    assert_eq!(report[1].units[0].average, Some(6.1));
}

#[actix_web::test]
async fn test_active_weights_follow_toggle() {
    let storage = storage().await;
    let class_id = class(&storage, "9A").await;
    let subject = storage.create_subject("História").await.unwrap();
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, None).await;

    let exam = storage
        .create_config(
            teacher.id,
            CreateAssessmentConfigRequest {
                class_id,
                subject_id: subject.id,
                unit: 2,
                assessment_type: AssessmentType::Exam,
                weight: 60,
            },
        )
        .await
        .unwrap();
    storage
        .create_config(
            teacher.id,
            CreateAssessmentConfigRequest {
                class_id,
                subject_id: subject.id,
                unit: 2,
                assessment_type: AssessmentType::Quiz,
                weight: 40,
            },
        )
        .await
        .unwrap();

    let mut weights = storage
        .list_active_weights(class_id, subject.id, 2)
        .await
        .unwrap();
    weights.sort();
    assert_eq!(weights, vec![40, 60]);

    let toggled = storage
        .set_config_active(exam.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.active);
    assert_eq!(
        storage
            .list_active_weights(class_id, subject.id, 2)
            .await
            .unwrap(),
        vec![40]
    );

    let views = storage.list_configs_for_teacher(teacher.id).await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].subject_name, "História");

    assert!(storage.delete_config(exam.id).await.unwrap());
    assert!(storage.get_config_by_id(exam.id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_lessons_filtered_by_range_and_class() {
    let storage = storage().await;
    let a = class(&storage, "9A").await;
    let b = class(&storage, "9B").await;
    let subject = storage.create_subject("Geografia").await.unwrap();
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, None).await;

    for (class_id, day, time) in [
        (a, "2025-03-10", "09:00"),
        (a, "2025-03-10", "07:30"),
        (a, "2025-03-20", "07:30"),
        (b, "2025-03-11", "08:00"),
    ] {
        storage
            .create_lesson(NewLesson {
                class_id,
                teacher_id: teacher.id,
                subject_id: subject.id,
                date: date(day),
                time: chrono::NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
                topic: "Relevo".into(),
                lesson_type: LessonType::Theory,
            })
            .await
            .unwrap();
    }

    let lessons = storage
        .list_lessons(LessonFilter {
            start_date: date("2025-03-10"),
            end_date: date("2025-03-15"),
            class_id: Some(a),
            teacher_id: None,
        })
        .await
        .unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0].lesson.time.format("%H:%M").to_string(), "07:30");
    assert_eq!(lessons[0].class_name, "9A");
    assert_eq!(lessons[0].teacher_name, "prof");

    let teacher_view = storage
        .list_lessons(LessonFilter {
            start_date: date("2025-03-01"),
            end_date: date("2025-03-31"),
            class_id: None,
            teacher_id: Some(teacher.id),
        })
        .await
        .unwrap();
    assert_eq!(teacher_view.len(), 4);
}

#[actix_web::test]
async fn test_submission_lifecycle() {
    let storage = storage().await;
    let class_id = class(&storage, "9A").await;
    let subject = storage.create_subject("Português").await.unwrap();
    let teacher = user(&storage, "prof@escola.test", UserRole::Teacher, None).await;
    let student = user(&storage, "aluno@escola.test", UserRole::Student, Some(class_id)).await;

    let lesson = storage
        .create_lesson(NewLesson {
            class_id,
            teacher_id: teacher.id,
            subject_id: subject.id,
            date: date("2025-03-10"),
            time: chrono::NaiveTime::parse_from_str("07:30", "%H:%M").unwrap(),
            topic: "Redação".into(),
            lesson_type: LessonType::Activity,
        })
        .await
        .unwrap();
    let activity = storage
        .create_activity(CreateActivityRequest {
            lesson_id: lesson.id,
            description: "Texto dissertativo".into(),
            due_at: chrono::Utc::now(),
            points: 10.0,
            allow_resubmission: true,
            access_until: None,
        })
        .await
        .unwrap();

    let created = storage
        .create_submission(
            student.id,
            SubmitActivityRequest {
                activity_id: activity.id,
                response_text: Some("  primeira versão ".into()),
                files: vec![AttachmentInput {
                    name: "texto.pdf".into(),
                    file_type: "application/pdf".into(),
                    size: 1024,
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(created.attachments.len(), 1);
    assert_eq!(
        created.submission.response_text.as_deref(),
        Some("primeira versão")
    );
    assert_eq!(created.submission.file_name.as_deref(), Some("texto.pdf"));

    let pending = storage.list_pending_submissions(teacher.id).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].attachment_count, 1);
    assert_eq!(pending[0].activity_description, "Texto dissertativo");

    let graded = storage
        .grade_submission(created.submission.id, 85.0, Some("Bom".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.score, Some(85.0));
    assert!(storage.list_pending_submissions(teacher.id).await.unwrap().is_empty());

    let student_view = storage
        .list_activities_for_student(class_id, student.id)
        .await
        .unwrap();
    assert_eq!(student_view.len(), 1);
    let state = student_view[0].submission.as_ref().unwrap();
    assert_eq!(state.score, Some(85.0));
    assert_eq!(state.teacher_comment.as_deref(), Some("Bom"));

    // 重新提交覆盖内容并清除评分
    let resubmitted = storage
        .resubmit(
            created.submission.id,
            SubmitActivityRequest {
                activity_id: activity.id,
                response_text: Some("segunda versão".into()),
                files: vec![],
            },
        )
        .await
        .unwrap();
    assert_eq!(resubmitted.submission.id, created.submission.id);
    assert!(resubmitted.attachments.is_empty());
    assert!(resubmitted.submission.updated_at.is_some());
    assert_eq!(resubmitted.submission.score, None);
    assert_eq!(storage.list_pending_submissions(teacher.id).await.unwrap().len(), 1);

    let teacher_view = storage.list_activities_for_teacher(teacher.id).await.unwrap();
    assert_eq!(teacher_view.len(), 1);
    assert!(teacher_view[0].submission.is_none());

    let (found, found_lesson) = storage
        .get_activity_with_lesson(activity.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, activity.id);
    assert_eq!(found_lesson.teacher_id, teacher.id);
}

#[actix_web::test]
async fn test_ping() {
    let storage = storage().await;
    assert!(storage.ping().await.is_ok());
}
