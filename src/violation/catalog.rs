//! Fixed mapping between categories, violation types, and external rule identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::syntax::MemberKind;

/// A named group of violation types sharing one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ordering,
    Commenting,
    DocType,
    DocField,
    DocMethod,
    DocConstructor,
    FinalizeOverride,
    UnqualifiedStaticAccess,
    PrivateInstances,
    Useless,
    StringConcatenation,
    EmptyCatchBlock,
    MissingOverride,
    Clones,
}

impl Category {
    pub const ALL: [Self; 14] = [
        Self::Ordering,
        Self::Commenting,
        Self::DocType,
        Self::DocField,
        Self::DocMethod,
        Self::DocConstructor,
        Self::FinalizeOverride,
        Self::UnqualifiedStaticAccess,
        Self::PrivateInstances,
        Self::Useless,
        Self::StringConcatenation,
        Self::EmptyCatchBlock,
        Self::MissingOverride,
        Self::Clones,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ordering => "Ordering",
            Self::Commenting => "Commenting",
            Self::DocType => "DocType",
            Self::DocField => "DocField",
            Self::DocMethod => "DocMethod",
            Self::DocConstructor => "DocConstructor",
            Self::FinalizeOverride => "FinalizeOverride",
            Self::UnqualifiedStaticAccess => "UnqualifiedStaticAccess",
            Self::PrivateInstances => "PrivateInstances",
            Self::Useless => "Useless",
            Self::StringConcatenation => "StringConcatenation",
            Self::EmptyCatchBlock => "EmptyCatchBlock",
            Self::MissingOverride => "MissingOverride",
            Self::Clones => "Clones",
        }
    }

    /// Violation types belonging to this category, in report column order.
    #[must_use]
    pub fn types(self) -> Vec<ViolationType> {
        ViolationType::ALL
            .iter()
            .copied()
            .filter(|t| t.category() == self)
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Defects the documentation check distinguishes for every declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocDefect {
    Missing,
    InvalidForm,
    MissingSummary,
    SummaryTooShort,
}

/// The finest-grained classification of a single rule breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    OrderingNestedTypes,
    OrderingStaticFields,
    OrderingStaticMethods,
    OrderingInstanceFields,
    OrderingConstructors,
    OrderingInstanceMethods,

    CommentFrequencyLow,
    CommentFrequencyHigh,
    CommentNotMeaningful,

    DocTypeMissing,
    DocTypeInvalid,
    DocTypeMissingSummary,
    DocTypeSummaryTooShort,
    DocFieldMissing,
    DocFieldInvalid,
    DocFieldMissingSummary,
    DocFieldSummaryTooShort,
    DocMethodMissing,
    DocMethodInvalid,
    DocMethodMissingSummary,
    DocMethodSummaryTooShort,
    DocConstructorMissing,
    DocConstructorInvalid,
    DocConstructorMissingSummary,
    DocConstructorSummaryTooShort,

    FinalizeOverride,

    StaticMethodViaInstance,
    StaticFieldViaInstance,

    PublicInstanceField,

    UnusedAssignment,
    UnusedLocalVariable,
    UnusedField,
    UnusedMethod,
    UnnecessaryCast,
    UnnecessaryConstructor,
    UnnecessaryFullyQualifiedName,
    UnnecessaryImport,
    UnnecessaryReturn,
    CommentedOutCode,

    StringConcatenation,
    EmptyCatchBlock,
    MissingOverride,
    DuplicateCode,
}

/// External engine rule identifiers and the violation type each one reports.
const RULES: &[(&str, ViolationType)] = &[
    ("UnusedAssignment", ViolationType::UnusedAssignment),
    ("UnusedLocalVariable", ViolationType::UnusedLocalVariable),
    ("UnusedPrivateField", ViolationType::UnusedField),
    ("UnusedPrivateMethod", ViolationType::UnusedMethod),
    ("UnnecessaryCast", ViolationType::UnnecessaryCast),
    ("UnnecessaryConstructor", ViolationType::UnnecessaryConstructor),
    (
        "UnnecessaryFullyQualifiedName",
        ViolationType::UnnecessaryFullyQualifiedName,
    ),
    ("UnnecessaryImport", ViolationType::UnnecessaryImport),
    ("UnnecessaryReturn", ViolationType::UnnecessaryReturn),
    ("StringConcatenation", ViolationType::StringConcatenation),
    ("EmptyCatchBlock", ViolationType::EmptyCatchBlock),
    ("MissingOverride", ViolationType::MissingOverride),
    ("CPD", ViolationType::DuplicateCode),
];

impl ViolationType {
    pub const ALL: [Self; 43] = [
        Self::OrderingNestedTypes,
        Self::OrderingStaticFields,
        Self::OrderingStaticMethods,
        Self::OrderingInstanceFields,
        Self::OrderingConstructors,
        Self::OrderingInstanceMethods,
        Self::CommentFrequencyLow,
        Self::CommentFrequencyHigh,
        Self::CommentNotMeaningful,
        Self::DocTypeMissing,
        Self::DocTypeInvalid,
        Self::DocTypeMissingSummary,
        Self::DocTypeSummaryTooShort,
        Self::DocFieldMissing,
        Self::DocFieldInvalid,
        Self::DocFieldMissingSummary,
        Self::DocFieldSummaryTooShort,
        Self::DocMethodMissing,
        Self::DocMethodInvalid,
        Self::DocMethodMissingSummary,
        Self::DocMethodSummaryTooShort,
        Self::DocConstructorMissing,
        Self::DocConstructorInvalid,
        Self::DocConstructorMissingSummary,
        Self::DocConstructorSummaryTooShort,
        Self::FinalizeOverride,
        Self::StaticMethodViaInstance,
        Self::StaticFieldViaInstance,
        Self::PublicInstanceField,
        Self::UnusedAssignment,
        Self::UnusedLocalVariable,
        Self::UnusedField,
        Self::UnusedMethod,
        Self::UnnecessaryCast,
        Self::UnnecessaryConstructor,
        Self::UnnecessaryFullyQualifiedName,
        Self::UnnecessaryImport,
        Self::UnnecessaryReturn,
        Self::CommentedOutCode,
        Self::StringConcatenation,
        Self::EmptyCatchBlock,
        Self::MissingOverride,
        Self::DuplicateCode,
    ];

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::OrderingNestedTypes
            | Self::OrderingStaticFields
            | Self::OrderingStaticMethods
            | Self::OrderingInstanceFields
            | Self::OrderingConstructors
            | Self::OrderingInstanceMethods => Category::Ordering,
            Self::CommentFrequencyLow | Self::CommentFrequencyHigh | Self::CommentNotMeaningful => {
                Category::Commenting
            }
            Self::DocTypeMissing
            | Self::DocTypeInvalid
            | Self::DocTypeMissingSummary
            | Self::DocTypeSummaryTooShort => Category::DocType,
            Self::DocFieldMissing
            | Self::DocFieldInvalid
            | Self::DocFieldMissingSummary
            | Self::DocFieldSummaryTooShort => Category::DocField,
            Self::DocMethodMissing
            | Self::DocMethodInvalid
            | Self::DocMethodMissingSummary
            | Self::DocMethodSummaryTooShort => Category::DocMethod,
            Self::DocConstructorMissing
            | Self::DocConstructorInvalid
            | Self::DocConstructorMissingSummary
            | Self::DocConstructorSummaryTooShort => Category::DocConstructor,
            Self::FinalizeOverride => Category::FinalizeOverride,
            Self::StaticMethodViaInstance | Self::StaticFieldViaInstance => {
                Category::UnqualifiedStaticAccess
            }
            Self::PublicInstanceField => Category::PrivateInstances,
            Self::UnusedAssignment
            | Self::UnusedLocalVariable
            | Self::UnusedField
            | Self::UnusedMethod
            | Self::UnnecessaryCast
            | Self::UnnecessaryConstructor
            | Self::UnnecessaryFullyQualifiedName
            | Self::UnnecessaryImport
            | Self::UnnecessaryReturn
            | Self::CommentedOutCode => Category::Useless,
            Self::StringConcatenation => Category::StringConcatenation,
            Self::EmptyCatchBlock => Category::EmptyCatchBlock,
            Self::MissingOverride => Category::MissingOverride,
            Self::DuplicateCode => Category::Clones,
        }
    }

    /// Column name used in tabular reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OrderingNestedTypes => "Ordering_NestedTypes",
            Self::OrderingStaticFields => "Ordering_StaticFields",
            Self::OrderingStaticMethods => "Ordering_StaticMethods",
            Self::OrderingInstanceFields => "Ordering_InstanceFields",
            Self::OrderingConstructors => "Ordering_Constructors",
            Self::OrderingInstanceMethods => "Ordering_InstanceMethods",
            Self::CommentFrequencyLow => "Commenting_FrequencyLow",
            Self::CommentFrequencyHigh => "Commenting_FrequencyHigh",
            Self::CommentNotMeaningful => "Commenting_NotMeaningful",
            Self::DocTypeMissing => "DocType_Missing",
            Self::DocTypeInvalid => "DocType_Invalid",
            Self::DocTypeMissingSummary => "DocType_MissingSummary",
            Self::DocTypeSummaryTooShort => "DocType_SummaryTooShort",
            Self::DocFieldMissing => "DocField_Missing",
            Self::DocFieldInvalid => "DocField_Invalid",
            Self::DocFieldMissingSummary => "DocField_MissingSummary",
            Self::DocFieldSummaryTooShort => "DocField_SummaryTooShort",
            Self::DocMethodMissing => "DocMethod_Missing",
            Self::DocMethodInvalid => "DocMethod_Invalid",
            Self::DocMethodMissingSummary => "DocMethod_MissingSummary",
            Self::DocMethodSummaryTooShort => "DocMethod_SummaryTooShort",
            Self::DocConstructorMissing => "DocConstructor_Missing",
            Self::DocConstructorInvalid => "DocConstructor_Invalid",
            Self::DocConstructorMissingSummary => "DocConstructor_MissingSummary",
            Self::DocConstructorSummaryTooShort => "DocConstructor_SummaryTooShort",
            Self::FinalizeOverride => "FinalizeOverride",
            Self::StaticMethodViaInstance => "UnqualifiedStaticAccess_Method",
            Self::StaticFieldViaInstance => "UnqualifiedStaticAccess_Field",
            Self::PublicInstanceField => "PrivateInstances",
            Self::UnusedAssignment => "Useless_Assignment",
            Self::UnusedLocalVariable => "Useless_LocalVariable",
            Self::UnusedField => "Useless_Field",
            Self::UnusedMethod => "Useless_Method",
            Self::UnnecessaryCast => "Useless_Cast",
            Self::UnnecessaryConstructor => "Useless_Constructor",
            Self::UnnecessaryFullyQualifiedName => "Useless_FullyQualifiedName",
            Self::UnnecessaryImport => "Useless_Import",
            Self::UnnecessaryReturn => "Useless_Return",
            Self::CommentedOutCode => "Useless_CommentedCode",
            Self::StringConcatenation => "StringConcatenation",
            Self::EmptyCatchBlock => "EmptyCatchBlock",
            Self::MissingOverride => "MissingOverride",
            Self::DuplicateCode => "Clones",
        }
    }

    /// Human-readable message; `{0}` and `{1}` are positional placeholders.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OrderingNestedTypes => {
                "Nested type '{0}' should be declared after '{1}'"
            }
            Self::OrderingStaticFields => "Static field '{0}' should be declared after '{1}'",
            Self::OrderingStaticMethods => "Static method '{0}' should be declared after '{1}'",
            Self::OrderingInstanceFields => {
                "Instance field '{0}' should be declared after '{1}'"
            }
            Self::OrderingConstructors => "Constructor '{0}' should be declared after '{1}'",
            Self::OrderingInstanceMethods => {
                "Instance method '{0}' should be declared after '{1}'"
            }
            Self::CommentFrequencyLow => "Method has too few comments",
            Self::CommentFrequencyHigh => "Method has too many comments",
            Self::CommentNotMeaningful => "Comment restates the code it annotates",
            Self::DocTypeMissing => "Type declaration has no documentation comment",
            Self::DocFieldMissing => "Field has no documentation comment",
            Self::DocMethodMissing => "Method has no documentation comment",
            Self::DocConstructorMissing => "Constructor has no documentation comment",
            Self::DocTypeInvalid
            | Self::DocFieldInvalid
            | Self::DocMethodInvalid
            | Self::DocConstructorInvalid => "Declaration comment is not a documentation comment",
            Self::DocTypeMissingSummary
            | Self::DocFieldMissingSummary
            | Self::DocMethodMissingSummary
            | Self::DocConstructorMissingSummary => "Documentation comment has no summary",
            Self::DocTypeSummaryTooShort
            | Self::DocFieldSummaryTooShort
            | Self::DocMethodSummaryTooShort
            | Self::DocConstructorSummaryTooShort => "Documentation summary is too short",
            Self::FinalizeOverride => "The finalize method must not be overridden",
            Self::StaticMethodViaInstance => {
                "Static method should be called through its declaring type"
            }
            Self::StaticFieldViaInstance => {
                "Static field should be accessed through its declaring type"
            }
            Self::PublicInstanceField => "Instance field should be private or protected",
            Self::UnusedAssignment => "Assigned value is never used",
            Self::UnusedLocalVariable => "Local variable is never used",
            Self::UnusedField => "Private field is never used",
            Self::UnusedMethod => "Private method is never used",
            Self::UnnecessaryCast => "Cast is unnecessary",
            Self::UnnecessaryConstructor => "Constructor is unnecessary",
            Self::UnnecessaryFullyQualifiedName => "Fully qualified name is unnecessary",
            Self::UnnecessaryImport => "Import is unnecessary",
            Self::UnnecessaryReturn => "Return statement is unnecessary",
            Self::CommentedOutCode => "Commented-out code should be removed",
            Self::StringConcatenation => "String concatenation in a loop",
            Self::EmptyCatchBlock => "Catch block is empty",
            Self::MissingOverride => "Method overrides a supertype method without an annotation",
            Self::DuplicateCode => "Code is duplicated elsewhere",
        }
    }

    /// Render the message template with positional arguments.
    #[must_use]
    pub fn render(self, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(self.message().to_string(), |message, (i, arg)| {
                message.replace(&format!("{{{i}}}"), arg)
            })
    }

    /// Ordering type attributed to a member of the given kind.
    #[must_use]
    pub const fn ordering(kind: MemberKind) -> Self {
        match kind {
            MemberKind::NestedTypes => Self::OrderingNestedTypes,
            MemberKind::StaticFields => Self::OrderingStaticFields,
            MemberKind::StaticMethods => Self::OrderingStaticMethods,
            MemberKind::InstanceFields => Self::OrderingInstanceFields,
            MemberKind::Constructors => Self::OrderingConstructors,
            MemberKind::InstanceMethods => Self::OrderingInstanceMethods,
        }
    }

    /// Documentation type for a defect found on a declaration of the given category.
    ///
    /// Returns `None` when the category is not one of the documentation categories.
    #[must_use]
    pub const fn documentation(category: Category, defect: DocDefect) -> Option<Self> {
        let ty = match (category, defect) {
            (Category::DocType, DocDefect::Missing) => Self::DocTypeMissing,
            (Category::DocType, DocDefect::InvalidForm) => Self::DocTypeInvalid,
            (Category::DocType, DocDefect::MissingSummary) => Self::DocTypeMissingSummary,
            (Category::DocType, DocDefect::SummaryTooShort) => Self::DocTypeSummaryTooShort,
            (Category::DocField, DocDefect::Missing) => Self::DocFieldMissing,
            (Category::DocField, DocDefect::InvalidForm) => Self::DocFieldInvalid,
            (Category::DocField, DocDefect::MissingSummary) => Self::DocFieldMissingSummary,
            (Category::DocField, DocDefect::SummaryTooShort) => Self::DocFieldSummaryTooShort,
            (Category::DocMethod, DocDefect::Missing) => Self::DocMethodMissing,
            (Category::DocMethod, DocDefect::InvalidForm) => Self::DocMethodInvalid,
            (Category::DocMethod, DocDefect::MissingSummary) => Self::DocMethodMissingSummary,
            (Category::DocMethod, DocDefect::SummaryTooShort) => Self::DocMethodSummaryTooShort,
            (Category::DocConstructor, DocDefect::Missing) => Self::DocConstructorMissing,
            (Category::DocConstructor, DocDefect::InvalidForm) => Self::DocConstructorInvalid,
            (Category::DocConstructor, DocDefect::MissingSummary) => {
                Self::DocConstructorMissingSummary
            }
            (Category::DocConstructor, DocDefect::SummaryTooShort) => {
                Self::DocConstructorSummaryTooShort
            }
            _ => return None,
        };
        Some(ty)
    }

    /// Look up the violation type an external engine reports under `rule`.
    #[must_use]
    pub fn from_rule_id(rule: &str) -> Option<Self> {
        RULES
            .iter()
            .find(|(id, _)| *id == rule)
            .map(|(_, ty)| *ty)
    }

    /// External rule identifiers mapping to this type.
    #[must_use]
    pub fn rule_ids(self) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|(_, ty)| *ty == self)
            .map(|(id, _)| *id)
            .collect()
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
