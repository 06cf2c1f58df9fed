use approx::assert_relative_eq;
use f16_aero::Coefficients;

/// Assert that every coefficient is a finite number
#[track_caller]
pub fn assert_coefficients_valid(c: &Coefficients) {
    let names = ["Cx", "Cz", "Cm", "Cy", "Cn", "Cl"];
    for (name, value) in names.iter().zip(c.to_array()) {
        assert!(value.is_finite(), "{} is not finite: {}", name, value);
    }
}

/// Assert that two coefficient sets agree to `epsilon`
#[track_caller]
pub fn assert_coefficients_eq(actual: &Coefficients, expected: &Coefficients, epsilon: f64) {
    assert_relative_eq!(actual.c_x, expected.c_x, epsilon = epsilon);
    assert_relative_eq!(actual.c_z, expected.c_z, epsilon = epsilon);
    assert_relative_eq!(actual.c_m, expected.c_m, epsilon = epsilon);
    assert_relative_eq!(actual.c_y, expected.c_y, epsilon = epsilon);
    assert_relative_eq!(actual.c_n, expected.c_n, epsilon = epsilon);
    assert_relative_eq!(actual.c_l, expected.c_l, epsilon = epsilon);
}
