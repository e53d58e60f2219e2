use std::ops::RangeInclusive;

use crate::models::report_cards::entities::{
    ReportConfigRow, ReportScoreRow, ReportSubject, SubjectReport, UnitReport, UnitScore,
    UnitWeight,
};

/// 每学年的评估单元
pub const UNITS: RangeInclusive<i32> = 1..=4;

/// 两位小数，按浮点数的精确十进制值四舍五入（远离零）
///
/// `x * 100.0` 会先产生一次舍入误差，例如 1.115 实际存储为 1.11499...，
/// 因此直接在尾数上做整数运算。
pub fn round_average(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let bits = x.abs().to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), exp_bits - 1075)
    };

    // 绝对值不小于 2^52 时已是整数
    if exp >= 0 {
        return x;
    }

    let hundredths: i128 = if exp <= -120 {
        0
    } else {
        let shift = exp.unsigned_abs();
        let scaled = i128::from(mantissa) * 100;
        let quotient = scaled >> shift;
        let remainder = scaled - (quotient << shift);
        if remainder * 2 >= (1_i128 << shift) {
            quotient + 1
        } else {
            quotient
        }
    };

    if hundredths == 0 {
        return 0.0;
    }
    (hundredths as f64 / 100.0).copysign(x)
}

/// 根据班级科目、启用的权重配置和学生成绩生成成绩单
///
/// 科目顺序与 `subjects` 一致。没有任何配置的单元不出现在结果中；
/// 已配置但缺少成绩的类型按 0 分计入，权重照常累加。
/// 未配置的成绩类型会列出，但不参与加权。
pub fn build_report(
    subjects: &[ReportSubject],
    configs: &[ReportConfigRow],
    scores: &[ReportScoreRow],
) -> Vec<SubjectReport> {
    subjects
        .iter()
        .map(|subject| build_subject(subject, configs, scores))
        .collect()
}

fn build_subject(
    subject: &ReportSubject,
    configs: &[ReportConfigRow],
    scores: &[ReportScoreRow],
) -> SubjectReport {
    let units: Vec<UnitReport> = UNITS
        .filter_map(|unit| build_unit(subject.subject_id, unit, configs, scores))
        .collect();

    let averages: Vec<f64> = units.iter().filter_map(|u| u.average).collect();
    let overall_average = if averages.is_empty() {
        None
    } else {
        Some(round_average(
            averages.iter().sum::<f64>() / averages.len() as f64,
        ))
    };

    SubjectReport {
        subject_id: subject.subject_id,
        subject_name: subject.subject_name.clone(),
        overall_average,
        units,
    }
}

fn build_unit(
    subject_id: i64,
    unit: i32,
    configs: &[ReportConfigRow],
    scores: &[ReportScoreRow],
) -> Option<UnitReport> {
    let unit_configs: Vec<&ReportConfigRow> = configs
        .iter()
        .filter(|c| c.subject_id == subject_id && c.unit == unit)
        .collect();
    if unit_configs.is_empty() {
        return None;
    }

    let unit_scores: Vec<&ReportScoreRow> = scores
        .iter()
        .filter(|s| s.subject_id == subject_id && s.unit == unit)
        .collect();

    let mut weighted_sum = 0.0_f64;
    let mut weight_sum: i64 = 0;
    for config in &unit_configs {
        // 重复的配置行各自计入
        if let Some(score) = unit_scores
            .iter()
            .find(|s| s.assessment_type == config.assessment_type)
        {
            weighted_sum += score.value * f64::from(config.weight);
        }
        weight_sum += i64::from(config.weight);
    }

    let average = if weight_sum > 0 {
        Some(round_average(weighted_sum / weight_sum as f64))
    } else {
        None
    };

    Some(UnitReport {
        unit,
        average,
        scores: unit_scores
            .into_iter()
            .map(|s| UnitScore {
                assessment_type: s.assessment_type,
                value: s.value,
                note: s.note.clone(),
                recorded_on: s.recorded_on,
            })
            .collect(),
        configs: unit_configs
            .into_iter()
            .map(|c| UnitWeight {
                assessment_type: c.assessment_type,
                weight: c.weight,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessments::entities::AssessmentType;

    fn subject(id: i64, name: &str) -> ReportSubject {
        ReportSubject {
            subject_id: id,
            subject_name: name.to_string(),
        }
    }

    fn config(subject_id: i64, unit: i32, ty: AssessmentType, weight: i32) -> ReportConfigRow {
        ReportConfigRow {
            subject_id,
            unit,
            assessment_type: ty,
            weight,
        }
    }

    fn score(subject_id: i64, unit: i32, ty: AssessmentType, value: f64) -> ReportScoreRow {
        ReportScoreRow {
            subject_id,
            unit,
            assessment_type: ty,
            value,
            note: None,
            recorded_on: chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        }
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("average should be present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_missing_score_counts_as_zero() {
        use AssessmentType::*;
        let configs = vec![
            config(1, 1, Exam, 40),
            config(1, 1, Activity, 30),
            config(1, 1, Project, 30),
        ];
        let scores = vec![score(1, 1, Exam, 8.5), score(1, 1, Activity, 9.0)];

        let report = build_report(&[subject(1, "Matemática")], &configs, &scores);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].units.len(), 1);
        assert_close(report[0].units[0].average, 6.10);
        assert_close(report[0].overall_average, 6.10);
    }

    #[test]
    fn test_fully_scored_unit() {
        use AssessmentType::*;
        let configs = vec![config(1, 1, Exam, 50), config(1, 1, Notebook, 50)];
        let scores = vec![score(1, 1, Exam, 7.0), score(1, 1, Notebook, 9.5)];

        let report = build_report(&[subject(1, "Português")], &configs, &scores);
        assert_close(report[0].units[0].average, 8.25);
    }

    #[test]
    fn test_overall_skips_unconfigured_and_null_units() {
        use AssessmentType::*;
        let configs = vec![
            config(1, 1, Exam, 50),
            config(1, 1, Notebook, 50),
            config(1, 3, Exam, 100),
            config(1, 4, Exam, 0),
        ];
        let scores = vec![
            score(1, 1, Exam, 7.0),
            score(1, 1, Notebook, 9.5),
            score(1, 3, Exam, 6.5),
            score(1, 4, Exam, 9.0),
        ];

        let report = build_report(&[subject(1, "História")], &configs, &scores);
        let units: Vec<i32> = report[0].units.iter().map(|u| u.unit).collect();
        assert_eq!(units, vec![1, 3, 4]);
        assert_close(report[0].units[0].average, 8.25);
        assert_close(report[0].units[1].average, 6.5);
        assert_eq!(report[0].units[2].average, None);
        assert_close(report[0].overall_average, 7.38);
    }

    #[test]
    fn test_configured_unit_without_scores_averages_zero() {
        let configs = vec![config(1, 2, AssessmentType::Quiz, 100)];
        let report = build_report(&[subject(1, "Geografia")], &configs, &[]);
        assert_eq!(report[0].units.len(), 1);
        assert_eq!(report[0].units[0].unit, 2);
        assert_eq!(report[0].units[0].average, Some(0.0));
        assert!(report[0].units[0].scores.is_empty());
        assert_eq!(report[0].overall_average, Some(0.0));
    }

    #[test]
    fn test_subject_without_configs_has_no_units() {
        let scores = vec![score(1, 1, AssessmentType::Exam, 10.0)];
        let report = build_report(&[subject(1, "Artes")], &[], &scores);
        assert_eq!(report.len(), 1);
        assert!(report[0].units.is_empty());
        assert_eq!(report[0].overall_average, None);
    }

    #[test]
    fn test_weights_are_renormalized() {
        use AssessmentType::*;
        // 权重和为 60
        let configs = vec![config(1, 1, Exam, 40), config(1, 1, Quiz, 20)];
        let scores = vec![score(1, 1, Exam, 6.0), score(1, 1, Quiz, 9.0)];
        let report = build_report(&[subject(1, "Física")], &configs, &scores);
        assert_close(report[0].units[0].average, 7.0);
    }

    #[test]
    fn test_unconfigured_score_listed_but_not_weighted() {
        use AssessmentType::*;
        let configs = vec![config(1, 1, Exam, 100)];
        let scores = vec![score(1, 1, Exam, 5.0), score(1, 1, Other, 10.0)];
        let report = build_report(&[subject(1, "Química")], &configs, &scores);
        let unit = &report[0].units[0];
        assert_eq!(unit.scores.len(), 2);
        assert_eq!(unit.configs.len(), 1);
        assert_close(unit.average, 5.0);
    }

    #[test]
    fn test_duplicate_configs_each_count() {
        use AssessmentType::*;
        let configs = vec![
            config(1, 1, Exam, 50),
            config(1, 1, Exam, 50),
            config(1, 1, Notebook, 100),
        ];
        let scores = vec![score(1, 1, Exam, 8.0), score(1, 1, Notebook, 2.0)];
        let report = build_report(&[subject(1, "Biologia")], &configs, &scores);
        // (8*50 + 8*50 + 2*100) / 200
        assert_close(report[0].units[0].average, 5.0);
        assert_eq!(report[0].units[0].configs.len(), 3);
    }

    #[test]
    fn test_subjects_are_kept_apart() {
        use AssessmentType::*;
        let configs = vec![config(1, 1, Exam, 100), config(2, 1, Exam, 100)];
        let scores = vec![score(1, 1, Exam, 4.0), score(2, 1, Exam, 9.0)];
        let report = build_report(
            &[subject(2, "Inglês"), subject(1, "Matemática")],
            &configs,
            &scores,
        );
        assert_eq!(report[0].subject_id, 2);
        assert_close(report[0].overall_average, 9.0);
        assert_close(report[1].overall_average, 4.0);
    }

    #[test]
    fn test_build_report_is_idempotent() {
        use AssessmentType::*;
        let subjects = vec![subject(1, "Matemática")];
        let configs = vec![config(1, 1, Exam, 70), config(1, 2, Activity, 100)];
        let scores = vec![score(1, 1, Exam, 7.7), score(1, 2, Activity, 3.3)];
        let first = build_report(&subjects, &configs, &scores);
        let second = build_report(&subjects, &configs, &scores);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_report(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_round_average_half_away_from_zero() {
        assert_eq!(round_average(7.375), 7.38);
        assert_eq!(round_average(8.25), 8.25);
        assert_eq!(round_average(6.664), 6.66);
        assert_eq!(round_average(0.0), 0.0);
    }

    #[test]
    fn test_round_average_uses_stored_value() {
        // 1.115 与 2.675 的二进制值略小于 .5 的分界
        assert_eq!(round_average(1.115), 1.11);
        assert_eq!(round_average(2.675), 2.67);
        // 0.125 可精确表示，远离零进位
        assert_eq!(round_average(0.125), 0.13);
        assert_eq!(round_average(-0.125), -0.13);
        assert_eq!(round_average(610.0 / 100.0), 6.1);
        assert_eq!(round_average(0.004), 0.0);
        assert_eq!(round_average(10.0), 10.0);
    }

    #[test]
    fn test_unit_average_rounds_like_stored_decimal() {
        let configs = vec![config(1, 1, AssessmentType::Exam, 100)];
        let scores = vec![score(1, 1, AssessmentType::Exam, 1.115)];
        let report = build_report(&[subject(1, "Física")], &configs, &scores);
        assert_eq!(report[0].units[0].average, Some(1.11));
    }

    #[test]
    fn test_average_serializes_as_number() {
        let configs = vec![config(1, 1, AssessmentType::Exam, 100)];
        let scores = vec![score(1, 1, AssessmentType::Exam, 7.5)];
        let report = build_report(&[subject(1, "Matemática")], &configs, &scores);
        let value = serde_json::to_value(&report[0]).unwrap();
        assert_eq!(value["overall_average"], serde_json::json!(7.5));
        assert_eq!(value["units"][0]["scores"][0]["assessment_type"], "exam");
    }
}
