#[cfg(test)]
mod model_tests {
    use std::collections::BTreeSet;

    use crate::models::{Course, Plan, Season, Semester, Weekday};

    fn course(id: &str, credits: u8) -> Course {
        Course {
            id: id.to_string(),
            name: format!("Course {id}"),
            credits,
            days_of_week: None,
            start_time: None,
            end_time: None,
            grade: None,
            color: None,
            notes: None,
        }
    }

    fn semester(id: &str, courses: Vec<Course>) -> Semester {
        Semester {
            id: id.to_string(),
            name: format!("Semester {id}"),
            year: 2024,
            season: Season::Autumn,
            notes: None,
            is_active: None,
            courses,
        }
    }

    #[test]
    fn test_season_from_str_accepts_legacy_fall() {
        assert_eq!("fall".parse::<Season>(), Ok(Season::Autumn));
        assert_eq!("SPRING".parse::<Season>(), Ok(Season::Spring));
        assert!("Winter".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_orders_chronologically() {
        assert!(Season::Spring < Season::Summer);
        assert!(Season::Summer < Season::Autumn);
    }

    #[test]
    fn test_weekday_from_str_is_case_insensitive() {
        assert_eq!("monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!(" Friday ".parse::<Weekday>(), Ok(Weekday::Friday));
        assert!("Funday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_course_is_scheduled_requires_days_and_times() {
        let mut c = course("c1", 3);
        assert!(!c.is_scheduled());

        c.start_time = Some("09:00".into());
        c.end_time = Some("10:00".into());
        c.days_of_week = Some(BTreeSet::new());
        assert!(!c.is_scheduled());

        c.days_of_week = Some([Weekday::Monday].into_iter().collect());
        assert!(c.is_scheduled());
    }

    #[test]
    fn test_plan_lookup_helpers() {
        let plan = Plan {
            semesters: vec![
                semester("s1", vec![course("a", 3), course("b", 4)]),
                semester("s2", vec![course("c", 2)]),
            ],
            ..Default::default()
        };

        let (sem, found) = plan.course("c").expect("course c exists");
        assert_eq!(sem.id, "s2");
        assert_eq!(found.credits, 2);
        assert_eq!(plan.courses().count(), 3);
        assert_eq!(plan.course_ids().len(), 3);
        assert_eq!(plan.semester_ids().into_iter().collect::<Vec<_>>(), vec!["s1", "s2"]);
        assert_eq!(plan.semesters[0].total_credits(), 7);
    }

    #[test]
    fn test_course_serializes_camel_case_and_skips_absent_fields() {
        let mut c = course("c1", 3);
        c.start_time = Some("09:00".into());
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["startTime"], "09:00");
        assert!(json.get("grade").is_none());
        assert!(json.get("daysOfWeek").is_none());
    }
}
