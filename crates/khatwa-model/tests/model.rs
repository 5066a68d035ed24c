//! Tests for khatwa-model types.

use khatwa_model::{CourseTree, LessonId, ModuleId, ResourceKind};

const COURSE_JSON: &str = r#"{
  "id": "internal-audit-101",
  "title": "أساسيات المراجعة الداخلية",
  "modules": [
    {
      "id": "m1",
      "title": "المحور الأول",
      "previewFirstLesson": true,
      "progress": { "completed": 1, "total": 2, "percentage": 50.0 },
      "lessons": [
        {
          "id": "l1",
          "title": "مقدمة",
          "estimatedDuration": 12,
          "completedBy": 3,
          "resources": [
            { "id": "r1", "name": "ملخص.pdf", "type": "pdf", "size": "2 MB", "isProtected": true },
            { "id": "r2", "title": "شرح", "kind": "video", "durationSeconds": 610 },
            { "id": "r3", "title": "جداول", "kind": "xlsx" },
            { "id": "r4", "title": "شرائح", "kind": "keynote" }
          ]
        },
        { "id": "l2", "title": "المعايير" }
      ]
    },
    {
      "id": "m2",
      "title": "المحور الثاني",
      "subAxes": [
        {
          "id": "s1",
          "title": "الرقابة",
          "lessons": [ { "id": "l1", "title": "COSO", "isProtected": true } ]
        }
      ]
    }
  ]
}"#;

fn course() -> CourseTree {
    serde_json::from_str(COURSE_JSON).expect("parse course")
}

#[test]
fn parses_camel_case_and_aliases() {
    let course = course();
    assert_eq!(course.id, "internal-audit-101");
    let module = &course.modules[0];
    assert!(module.preview_first_lesson);
    assert_eq!(module.progress.map(|p| p.total), Some(2));

    let lesson = &module.lessons[0];
    assert_eq!(lesson.estimated_duration_minutes, Some(12));
    assert!(lesson.is_done());
    assert!(!module.lessons[1].is_done());

    let pdf = &lesson.resources[0];
    assert_eq!(pdf.title, "ملخص.pdf");
    assert_eq!(pdf.size_label.as_deref(), Some("2 MB"));
    assert!(pdf.is_protected);
    assert!(!pdf.is_preview);
}

#[test]
fn unknown_kinds_degrade_to_other() {
    let course = course();
    let kinds: Vec<ResourceKind> = course.modules[0].lessons[0]
        .resources
        .iter()
        .map(|resource| resource.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ResourceKind::Pdf,
            ResourceKind::Video,
            ResourceKind::Excel,
            ResourceKind::Other
        ]
    );
}

#[test]
fn resource_order_is_preserved() {
    let course = course();
    let ids: Vec<&str> = course.modules[0].lessons[0]
        .resources
        .iter()
        .map(|resource| resource.id.as_str())
        .collect();
    assert_eq!(ids, vec!["r1", "r2", "r3", "r4"]);
}

#[test]
fn lesson_lookup_prefers_given_module() {
    let course = course();
    let l1 = LessonId::new("l1").unwrap();

    let (module, lesson) = course.find_lesson(&l1, None).expect("lesson");
    assert_eq!(module.id, "m1");
    assert_eq!(lesson.title, "مقدمة");

    let m2 = ModuleId::new("m2").unwrap();
    let (module, lesson) = course.find_lesson(&l1, Some(&m2)).expect("lesson");
    assert_eq!(module.id, "m2");
    assert_eq!(lesson.title, "COSO");

    assert!(
        course
            .find_lesson(&LessonId::new("missing").unwrap(), None)
            .is_none()
    );
}

#[test]
fn counts_span_sub_axes() {
    let course = course();
    assert_eq!(course.lesson_count(), 3);
    assert_eq!(course.resource_count(), 4);
}

#[test]
fn kind_serializes_lowercase() {
    let json = serde_json::to_string(&ResourceKind::Excel).expect("serialize kind");
    assert_eq!(json, "\"excel\"");
}

#[test]
fn null_kind_does_not_fail_the_course() {
    let course: CourseTree = serde_json::from_str(
        r#"{"id":"c","title":"C","modules":[{"id":"m1","title":"M","lessons":[
            {"id":"l1","title":"L","resources":[{"id":"r1","title":"R","kind":null}]}]}]}"#,
    )
    .unwrap();
    assert_eq!(
        course.modules[0].lessons[0].resources[0].kind,
        ResourceKind::Other
    );
}

#[test]
fn parsed_ids_are_trimmed_and_match_constructed_ids() {
    let course: CourseTree =
        serde_json::from_str(r#"{"id":" c ","title":"C","modules":[{"id":" m1 ","title":"M"}]}"#)
            .unwrap();
    let module = ModuleId::new(" m1 ").unwrap();
    assert!(course.module(&module).is_some());
    assert_eq!(course.id.as_str(), "c");
}

#[test]
fn blank_ids_are_rejected_at_parse_time() {
    let err = serde_json::from_str::<CourseTree>(r#"{"id":"c","title":"C","modules":[{"id":"  ","title":"M"}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("module"));
}
