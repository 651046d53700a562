use crate::name::ClassName;

/// Token replaced by the class name in every template.
pub const PLACEHOLDER: &str = "{{classname}}";

pub const IMPLEMENTATION_TEMPLATE: &str = include_str!("../templates/plugin.cpp.in");
pub const HEADER_TEMPLATE: &str = include_str!("../templates/plugin.hpp.in");
pub const CMAKE_TEMPLATE: &str = include_str!("../templates/CMakeLists.txt.in");

/// Substitutes `name` for every [`PLACEHOLDER`] in `template`.
///
/// This is literal text replacement: nothing else in the template is
/// interpreted, so braces and `${...}` CMake variables pass through untouched.
pub fn render(template: &str, name: &ClassName) -> String {
    template.replace(PLACEHOLDER, name.as_str())
}
