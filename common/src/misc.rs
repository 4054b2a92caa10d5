#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectStatus {
    Active,
    Completed,
    Cancelled,
}
impl ToString for ProjectStatus {
    fn to_string(&self) -> String {
        match self {
            ProjectStatus::Active => "active".to_string(),
            ProjectStatus::Completed => "completed".to_string(),
            ProjectStatus::Cancelled => "cancelled".to_string(),
        }
    }
}
impl ProjectStatus {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ProjectStatus::Active),
            "completed" => Some(ProjectStatus::Completed),
            "cancelled" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectOccupation {
    Undergraduate,
    Staff,
    Postgraduate,
}
impl ToString for ProjectOccupation {
    fn to_string(&self) -> String {
        match self {
            ProjectOccupation::Undergraduate => "undergraduate".to_string(),
            ProjectOccupation::Staff => "staff".to_string(),
            ProjectOccupation::Postgraduate => "postgraduate".to_string(),
        }
    }
}
impl ProjectOccupation {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "undergraduate" => Some(ProjectOccupation::Undergraduate),
            "staff" => Some(ProjectOccupation::Staff),
            "postgraduate" => Some(ProjectOccupation::Postgraduate),
            _ => None,
        }
    }

    /// Staff and postgraduate showcases sit behind the membership gate.
    pub fn is_gated(&self) -> bool {
        matches!(
            self,
            ProjectOccupation::Staff | ProjectOccupation::Postgraduate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentStatus {
    Created,
    Approved,
}
impl ToString for PaymentStatus {
    fn to_string(&self) -> String {
        match self {
            PaymentStatus::Created => "Created".to_string(),
            PaymentStatus::Approved => "Approved".to_string(),
        }
    }
}
impl PaymentStatus {
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Created" => Some(PaymentStatus::Created),
            "Approved" => Some(PaymentStatus::Approved),
            _ => None,
        }
    }
}
