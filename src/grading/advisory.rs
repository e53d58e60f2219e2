use crate::models::assessments::responses::WeightAdvisory;

/// 单元内启用权重的期望总和
pub const EXPECTED_TOTAL_WEIGHT: i32 = 100;

/// 汇总同一（班级, 科目, 单元）下启用配置的权重
///
/// 只返回提示，调用方不得据此拒绝写入。
pub fn weight_advisory(active_weights: &[i32]) -> WeightAdvisory {
    let total_weight: i32 = active_weights.iter().sum();
    let balanced = total_weight == EXPECTED_TOTAL_WEIGHT;
    let warning = if balanced {
        None
    } else {
        Some(format!(
            "Active weights for this unit sum to {total_weight}%, expected {EXPECTED_TOTAL_WEIGHT}%"
        ))
    };

    WeightAdvisory {
        total_weight,
        balanced,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_weights() {
        let advisory = weight_advisory(&[40, 30, 30]);
        assert_eq!(advisory.total_weight, 100);
        assert!(advisory.balanced);
        assert!(advisory.warning.is_none());
    }

    #[test]
    fn test_under_and_over_weight_warn() {
        let under = weight_advisory(&[40, 30]);
        assert!(!under.balanced);
        assert_eq!(under.total_weight, 70);
        assert!(under.warning.unwrap().contains("70%"));

        let over = weight_advisory(&[60, 60]);
        assert!(!over.balanced);
        assert!(over.warning.is_some());
    }

    #[test]
    fn test_no_active_weights() {
        let advisory = weight_advisory(&[]);
        assert_eq!(advisory.total_weight, 0);
        assert!(!advisory.balanced);
    }
}
