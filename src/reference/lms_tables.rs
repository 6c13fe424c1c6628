//! Embedded LMS reference tables
//!
//! WHO Child Growth Standards (2006), BMI-for-age, monthly from 6 to 60 months.
//! Rows from 24 months onward use the standing-height based parameters.
//!
//! Source: WHO bfa_boys_z_exp / bfa_girls_z_exp tables

use super::{LmsMetric, ReferenceParameterPoint, Sex};

const fn lms(age_months: f64, l: f64, m: f64, s: f64) -> ReferenceParameterPoint {
    ReferenceParameterPoint { age_months, l, m, s }
}

// ============================================================================
// BMI-FOR-AGE
// ============================================================================

static BMI_FOR_AGE_BOYS: &[ReferenceParameterPoint] = &[
    lms(6.0, -0.1913, 17.3422, 0.08234),
    lms(7.0, -0.2385, 17.3288, 0.08183),
    lms(8.0, -0.2802, 17.2647, 0.0814),
    lms(9.0, -0.3176, 17.1662, 0.08102),
    lms(10.0, -0.3516, 17.0488, 0.08068),
    lms(11.0, -0.3828, 16.9239, 0.08037),
    lms(12.0, -0.4115, 16.7981, 0.08009),
    lms(13.0, -0.4382, 16.6743, 0.07982),
    lms(14.0, -0.463, 16.5548, 0.07958),
    lms(15.0, -0.4863, 16.4409, 0.07935),
    lms(16.0, -0.5082, 16.3335, 0.07913),
    lms(17.0, -0.5289, 16.2329, 0.07892),
    lms(18.0, -0.5484, 16.1392, 0.07873),
    lms(19.0, -0.5669, 16.0528, 0.07854),
    lms(20.0, -0.5846, 15.9743, 0.07836),
    lms(21.0, -0.6014, 15.9039, 0.07818),
    lms(22.0, -0.6174, 15.8412, 0.07802),
    lms(23.0, -0.6328, 15.7852, 0.07786),
    lms(24.0, -0.6187, 16.0189, 0.07785),
    lms(25.0, -0.584, 15.98, 0.07792),
    lms(26.0, -0.5497, 15.9414, 0.078),
    lms(27.0, -0.5166, 15.9036, 0.07808),
    lms(28.0, -0.485, 15.8667, 0.07818),
    lms(29.0, -0.4552, 15.8306, 0.07829),
    lms(30.0, -0.4274, 15.7953, 0.07841),
    lms(31.0, -0.4016, 15.7606, 0.07854),
    lms(32.0, -0.3782, 15.7267, 0.07867),
    lms(33.0, -0.3572, 15.6934, 0.07882),
    lms(34.0, -0.3388, 15.661, 0.07897),
    lms(35.0, -0.3231, 15.6294, 0.07914),
    lms(36.0, -0.3101, 15.5988, 0.07931),
    lms(37.0, -0.3, 15.5693, 0.0795),
    lms(38.0, -0.2927, 15.541, 0.07969),
    lms(39.0, -0.2884, 15.514, 0.0799),
    lms(40.0, -0.2869, 15.4885, 0.08012),
    lms(41.0, -0.2881, 15.4645, 0.08036),
    lms(42.0, -0.2919, 15.442, 0.08061),
    lms(43.0, -0.2981, 15.421, 0.08087),
    lms(44.0, -0.3067, 15.4013, 0.08115),
    lms(45.0, -0.3174, 15.3827, 0.08144),
    lms(46.0, -0.3303, 15.3652, 0.08174),
    lms(47.0, -0.3452, 15.3485, 0.08205),
    lms(48.0, -0.3622, 15.3326, 0.08238),
    lms(49.0, -0.3811, 15.3174, 0.08272),
    lms(50.0, -0.4019, 15.3029, 0.08307),
    lms(51.0, -0.4245, 15.2891, 0.08343),
    lms(52.0, -0.4488, 15.2759, 0.0838),
    lms(53.0, -0.4747, 15.2633, 0.08418),
    lms(54.0, -0.5019, 15.2514, 0.08457),
    lms(55.0, -0.5303, 15.24, 0.08496),
    lms(56.0, -0.5599, 15.2291, 0.08536),
    lms(57.0, -0.5905, 15.2188, 0.08577),
    lms(58.0, -0.6223, 15.2091, 0.08617),
    lms(59.0, -0.6552, 15.2, 0.08659),
    lms(60.0, -0.6892, 15.1916, 0.087),
];

static BMI_FOR_AGE_GIRLS: &[ReferenceParameterPoint] = &[
    lms(6.0, -0.1429, 16.9083, 0.09036),
    lms(7.0, -0.1916, 16.902, 0.08984),
    lms(8.0, -0.2344, 16.8404, 0.08939),
    lms(9.0, -0.2725, 16.7406, 0.08898),
    lms(10.0, -0.3068, 16.6184, 0.08861),
    lms(11.0, -0.3381, 16.4875, 0.08828),
    lms(12.0, -0.3667, 16.3568, 0.08797),
    lms(13.0, -0.3932, 16.2311, 0.08768),
    lms(14.0, -0.4177, 16.1128, 0.08741),
    lms(15.0, -0.4407, 16.0028, 0.08716),
    lms(16.0, -0.4623, 15.9017, 0.08693),
    lms(17.0, -0.4825, 15.8096, 0.08671),
    lms(18.0, -0.5017, 15.7263, 0.0865),
    lms(19.0, -0.5199, 15.6517, 0.0863),
    lms(20.0, -0.5372, 15.5855, 0.08612),
    lms(21.0, -0.5537, 15.5278, 0.08594),
    lms(22.0, -0.5695, 15.4787, 0.08577),
    lms(23.0, -0.5846, 15.438, 0.08561),
    lms(24.0, -0.5684, 15.6881, 0.08454),
    lms(25.0, -0.5684, 15.659, 0.08452),
    lms(26.0, -0.5684, 15.6308, 0.08449),
    lms(27.0, -0.5684, 15.6037, 0.08446),
    lms(28.0, -0.5684, 15.5777, 0.08444),
    lms(29.0, -0.5684, 15.5523, 0.08443),
    lms(30.0, -0.5684, 15.5276, 0.08444),
    lms(31.0, -0.5684, 15.5034, 0.08448),
    lms(32.0, -0.5684, 15.4798, 0.08455),
    lms(33.0, -0.5684, 15.4572, 0.08467),
    lms(34.0, -0.5684, 15.4356, 0.08484),
    lms(35.0, -0.5684, 15.4155, 0.08506),
    lms(36.0, -0.5684, 15.3968, 0.08535),
    lms(37.0, -0.5684, 15.3796, 0.08569),
    lms(38.0, -0.5684, 15.3638, 0.08609),
    lms(39.0, -0.5684, 15.3493, 0.08654),
    lms(40.0, -0.5684, 15.3358, 0.08704),
    lms(41.0, -0.5684, 15.3233, 0.08757),
    lms(42.0, -0.5684, 15.3116, 0.08813),
    lms(43.0, -0.5684, 15.3007, 0.08872),
    lms(44.0, -0.5684, 15.2905, 0.08931),
    lms(45.0, -0.5684, 15.2814, 0.08991),
    lms(46.0, -0.5684, 15.2732, 0.09051),
    lms(47.0, -0.5684, 15.2661, 0.0911),
    lms(48.0, -0.5684, 15.2602, 0.09168),
    lms(49.0, -0.5684, 15.2556, 0.09227),
    lms(50.0, -0.5684, 15.2523, 0.09286),
    lms(51.0, -0.5684, 15.2503, 0.09345),
    lms(52.0, -0.5684, 15.2496, 0.09403),
    lms(53.0, -0.5684, 15.2502, 0.0946),
    lms(54.0, -0.5684, 15.2519, 0.09515),
    lms(55.0, -0.5684, 15.2544, 0.09568),
    lms(56.0, -0.5684, 15.2575, 0.09618),
    lms(57.0, -0.5684, 15.2612, 0.09665),
    lms(58.0, -0.5684, 15.2653, 0.09709),
    lms(59.0, -0.5684, 15.2698, 0.0975),
    lms(60.0, -0.5684, 15.2747, 0.09789),
];

/// Embedded table for a (sex, metric) pair.
pub fn embedded_table(sex: Sex, metric: LmsMetric) -> &'static [ReferenceParameterPoint] {
    match (sex, metric) {
        (Sex::Male, LmsMetric::BmiForAge) => BMI_FOR_AGE_BOYS,
        (Sex::Female, LmsMetric::BmiForAge) => BMI_FOR_AGE_GIRLS,
    }
}
