#[derive(Debug, Clone)]
pub enum Message {
    // === DEPARTMENT MESSAGES ===
    DepartmentCreated(String),
    DepartmentRenamed(String),
    DepartmentDeleted(String),
    DepartmentNotFound(String),
    DepartmentAlreadyExists(String),
    DepartmentInUse(String),
    NoDepartmentsFound,
    DepartmentListHeader,

    // === EQUIPMENT TYPE MESSAGES ===
    EtypeCreated(String),
    EtypeRenamed(String),
    EtypeDeleted(String),
    EtypeNotFound(String),
    EtypeAlreadyExists(String),
    EtypeInUse(String),
    NoEtypesFound,
    EtypeListHeader,

    // === USER MESSAGES ===
    UserCreated(String),
    UserUpdated(String),
    UserDeleted(String),
    UserNotFound(String),
    UserHasRentalHistory(String),
    NoUsersFound,
    UserListHeader,

    // === EQUIPMENT MESSAGES ===
    EquipmentCreated(String),
    EquipmentUpdated(String),
    EquipmentDeleted(String),
    EquipmentNotFound(String),
    EquipmentHasRentalHistory(String),
    NoEquipmentFound,
    EquipmentListHeader,

    // === RENTAL MESSAGES ===
    RentalCreated(String, String),  // equipment, user
    RentalReturned(String, String), // equipment, user
    EquipmentAlreadyRented(String, String), // equipment, current holder
    EquipmentNotRented(String),
    NoRentalsFound,
    NoActiveRentals,
    RentalHistoryHeader,
    ConfirmRental(String, String),  // equipment, user
    ConfirmReturn(String, String),  // equipment, user
    OperationCancelled,

    // === SCAN MESSAGES ===
    ScanEquipmentPrompt,
    ScanBadgePrompt,
    ScanCancelled,
    ScanCodeInvalid(String),
    ScanUnknownEquipment,
    ScanUnknownBadge,

    // === REPORT MESSAGES ===
    UserReportHeader,
    EtypeReportHeader,
    EquipmentNameReportHeader,
    DepartmentReportHeader,
    NoReportData,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NoDataToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
}
