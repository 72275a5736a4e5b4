use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::flights::UpdateFlightConfigurationRequest;
use crate::error::{Result, StorageError};
use crate::models::{
    Flight, FlightAssignment, FlightConfiguration, IssueKind, MeetFlightState, Registration,
    ValidationIssue, GENDER_FEMALE, GENDER_MALE, ORIGIN_AUTO,
};
use crate::repository::flight_state::FlightStateRepository;
use crate::repository::registration::RegistrationRepository;

/// Flights above this member count get a size warning.
pub const FLIGHT_SIZE_SOFT_CAP: usize = 20;

/// Super-heavyweight ("120+kg" style) classes sort after every fixed class.
const OPEN_CLASS_OFFSET: f64 = 1000.0;
/// Unparsable weight classes sort after every fixed class but before the
/// open classes.
const UNPARSED_CLASS_RANK: f64 = 999.0;

/// Sort key for a weight class string such as "83kg", "120+kg" or "120kg+".
pub fn weight_class_sort_key(weight_class: &str) -> f64 {
    let lowered = weight_class.trim().to_ascii_lowercase();
    let is_open = lowered.contains('+');

    let without_plus: String = lowered.chars().filter(|c| *c != '+').collect();
    let numeral = without_plus
        .strip_suffix("kg")
        .unwrap_or(&without_plus)
        .trim();

    match numeral.parse::<f64>() {
        Ok(weight) if is_open => weight + OPEN_CLASS_OFFSET,
        Ok(weight) => weight,
        Err(_) => UNPARSED_CLASS_RANK,
    }
}

/// Number of flights for a group of `total_athletes` with the given target
/// flight size. Zero athletes need zero flights; a group at or under the
/// target is never split.
pub fn calculate_optimal_flight_count(total_athletes: usize, target_size: usize) -> usize {
    if total_athletes == 0 {
        return 0;
    }
    total_athletes.div_ceil(target_size.max(1))
}

/// Sequential letter label for a flight: "Flight A" through "Flight Z",
/// then "Flight AA" and so on.
pub fn flight_label(index: usize) -> String {
    let mut letters = String::new();
    let mut n = index;
    loop {
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    format!("Flight {letters}")
}

/// Partition registrations into gender groups: males first, then females,
/// then any other gender value in first-appearance order, so dirty data is
/// still assigned rather than dropped.
fn gender_groups(registrations: &[Registration]) -> Vec<(String, Vec<&Registration>)> {
    let mut groups: Vec<(String, Vec<&Registration>)> = vec![
        (GENDER_MALE.to_string(), Vec::new()),
        (GENDER_FEMALE.to_string(), Vec::new()),
    ];

    for registration in registrations {
        match groups.iter_mut().find(|(gender, _)| *gender == registration.gender) {
            Some((_, members)) => members.push(registration),
            None => groups.push((registration.gender.clone(), vec![registration])),
        }
    }

    groups.retain(|(_, members)| !members.is_empty());
    groups
}

/// Partition approved registrations into lifting flights.
///
/// Each gender group (or the whole input, when gender separation is off) is
/// sorted ascending by parsed weight class with a stable sort, split into
/// `ceil(group / target)` flights, and distributed contiguously so
/// weight-adjacent lifters share a flight. Labels and order indices run
/// sequentially across groups. Generation never emits an empty flight.
pub fn generate_flights(registrations: &[Registration], config: &FlightConfiguration) -> Vec<Flight> {
    let target = config.athletes_per_flight.max(1) as usize;
    let now = Utc::now().naive_utc();

    let groups: Vec<(Option<String>, Vec<&Registration>)> = if config.separate_by_gender {
        gender_groups(registrations)
            .into_iter()
            .map(|(gender, members)| (Some(gender), members))
            .collect()
    } else {
        vec![(None, registrations.iter().collect())]
    };

    let mut flights = Vec::new();
    for (gender, mut group) in groups {
        if group.is_empty() {
            continue;
        }

        group.sort_by(|a, b| {
            weight_class_sort_key(&a.weight_class).total_cmp(&weight_class_sort_key(&b.weight_class))
        });

        let flight_count = calculate_optimal_flight_count(group.len(), target);
        let flight_size = group.len().div_ceil(flight_count);

        for chunk in group.chunks(flight_size) {
            let index = flights.len();
            flights.push(Flight {
                flight_id: Uuid::new_v4(),
                name: flight_label(index),
                gender: gender.clone(),
                member_ids: chunk.iter().map(|r| r.registration_id).collect(),
                order: index as i32,
                updated_at: now,
            });
        }
    }

    flights
}

/// The assignment map for a generation run, origin `auto`.
pub fn auto_assignments(flights: &[Flight]) -> BTreeMap<Uuid, FlightAssignment> {
    let mut assignments = BTreeMap::new();
    for flight in flights {
        for member_id in &flight.member_ids {
            assignments.insert(
                *member_id,
                FlightAssignment {
                    registration_id: *member_id,
                    flight_id: flight.flight_id,
                    origin: ORIGIN_AUTO.to_string(),
                    assigned_at: flight.updated_at,
                },
            );
        }
    }
    assignments
}

/// Check the current flight state against the approved registrations.
///
/// Unassigned athletes produce one aggregate warning with a count, not one
/// finding per athlete. Per flight: an empty-member warning, a size warning
/// above [`FLIGHT_SIZE_SOFT_CAP`], and a gender-mix finding when the member
/// genders span more than one value. Gender mixing is the only
/// `Error`-severity finding; everything else is advisory.
pub fn validate_flights(flights: &[Flight], registrations: &[Registration]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let assigned: HashSet<Uuid> = flights
        .iter()
        .flat_map(|f| f.member_ids.iter().copied())
        .collect();
    let unassigned = registrations
        .iter()
        .filter(|r| !assigned.contains(&r.registration_id))
        .count();
    if unassigned > 0 {
        issues.push(ValidationIssue::warning(
            IssueKind::UnassignedAthletes,
            None,
            format!("{unassigned} approved athlete(s) are not assigned to any flight"),
        ));
    }

    let genders: HashMap<Uuid, &str> = registrations
        .iter()
        .map(|r| (r.registration_id, r.gender.as_str()))
        .collect();

    for flight in flights {
        if flight.member_ids.is_empty() {
            issues.push(ValidationIssue::warning(
                IssueKind::EmptyFlight,
                Some(flight.flight_id),
                format!("{} has no athletes", flight.name),
            ));
        }

        if flight.member_ids.len() > FLIGHT_SIZE_SOFT_CAP {
            issues.push(ValidationIssue::warning(
                IssueKind::SizeWarning,
                Some(flight.flight_id),
                format!(
                    "{} has {} athletes, above the recommended maximum of {}",
                    flight.name,
                    flight.member_ids.len(),
                    FLIGHT_SIZE_SOFT_CAP
                ),
            ));
        }

        let distinct_genders: HashSet<&str> = flight
            .member_ids
            .iter()
            .filter_map(|id| genders.get(id).copied())
            .collect();
        if distinct_genders.len() > 1 {
            issues.push(ValidationIssue::error(
                IssueKind::GenderMix,
                Some(flight.flight_id),
                format!("{} mixes genders and must be split", flight.name),
            ));
        }
    }

    issues
}

async fn load(pool: &PgPool, meet_id: Uuid) -> Result<(MeetFlightState, Option<i64>)> {
    let repo = FlightStateRepository::new(pool);
    Ok(match repo.find(meet_id).await? {
        Some(stored) => (stored.state, Some(stored.revision)),
        None => (MeetFlightState::default(), None),
    })
}

fn ordered_flight_records(state: &MeetFlightState) -> Vec<Flight> {
    state.ordered_flights().into_iter().cloned().collect()
}

/// Current flight state for a meet plus its validation findings. A meet
/// without a stored document reads as the default configuration with no
/// flights.
pub async fn get_state(
    pool: &PgPool,
    meet_id: Uuid,
) -> Result<(MeetFlightState, Vec<ValidationIssue>)> {
    let (state, _) = load(pool, meet_id).await?;
    let registrations = RegistrationRepository::new(pool).list_approved(meet_id).await?;
    let issues = validate_flights(&ordered_flight_records(&state), &registrations);

    Ok((state, issues))
}

/// Validation findings for a meet's current flight state.
pub async fn validate_stored(pool: &PgPool, meet_id: Uuid) -> Result<Vec<ValidationIssue>> {
    let (_, issues) = get_state(pool, meet_id).await?;
    Ok(issues)
}

/// Run auto-generation for a meet and persist the result, replacing any
/// prior flights and assignments. Zero approved registrations is not an
/// error: the stored state simply ends up with zero flights.
pub async fn generate_and_store(
    pool: &PgPool,
    meet_id: Uuid,
) -> Result<(MeetFlightState, Vec<ValidationIssue>)> {
    let registrations = RegistrationRepository::new(pool).list_approved(meet_id).await?;
    let (mut state, revision) = load(pool, meet_id).await?;

    let flights = generate_flights(&registrations, &state.config);
    let assignments = auto_assignments(&flights);
    state.replace_generated(flights, assignments, Utc::now().naive_utc())?;

    FlightStateRepository::new(pool).save(meet_id, &state, revision).await?;

    let issues = validate_flights(&ordered_flight_records(&state), &registrations);
    Ok((state, issues))
}

/// Move one athlete between flights and persist the result.
pub async fn move_athlete(
    pool: &PgPool,
    meet_id: Uuid,
    registration_id: Uuid,
    from_flight_id: Option<Uuid>,
    to_flight_id: Uuid,
) -> Result<MeetFlightState> {
    let repo = FlightStateRepository::new(pool);
    let stored = repo.find(meet_id).await?.ok_or(StorageError::NotFound)?;

    let mut state = stored.state;
    state.move_athlete(
        registration_id,
        from_flight_id,
        to_flight_id,
        Utc::now().naive_utc(),
    )?;

    repo.save(meet_id, &state, Some(stored.revision)).await?;
    Ok(state)
}

/// Remove one athlete from every flight and persist the result.
pub async fn unassign_athlete(
    pool: &PgPool,
    meet_id: Uuid,
    registration_id: Uuid,
) -> Result<MeetFlightState> {
    let repo = FlightStateRepository::new(pool);
    let stored = repo.find(meet_id).await?.ok_or(StorageError::NotFound)?;

    let mut state = stored.state;
    state.unassign_athlete(registration_id, Utc::now().naive_utc())?;

    repo.save(meet_id, &state, Some(stored.revision)).await?;
    Ok(state)
}

/// Delete every flight and assignment for a meet and reset the
/// auto-generation and lock flags. Safe to call when no flights exist.
pub async fn clear_flights(pool: &PgPool, meet_id: Uuid) -> Result<MeetFlightState> {
    let repo = FlightStateRepository::new(pool);
    let Some(stored) = repo.find(meet_id).await? else {
        return Ok(MeetFlightState::default());
    };

    let mut state = stored.state;
    state.clear()?;

    repo.save(meet_id, &state, Some(stored.revision)).await?;
    Ok(state)
}

/// Partial update of a meet's flight configuration. This is the one write
/// the lock does not guard, since it is how the lock itself is set and
/// cleared.
pub async fn update_configuration(
    pool: &PgPool,
    meet_id: Uuid,
    request: &UpdateFlightConfigurationRequest,
) -> Result<MeetFlightState> {
    let (mut state, revision) = load(pool, meet_id).await?;

    if let Some(value) = request.athletes_per_flight {
        state.config.athletes_per_flight = value;
    }
    if let Some(value) = request.separate_by_gender {
        state.config.separate_by_gender = value;
    }
    if let Some(value) = request.locked {
        state.config.locked = value;
    }

    FlightStateRepository::new(pool).save(meet_id, &state, revision).await?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueSeverity, STATUS_APPROVED};

    fn ts() -> chrono::NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn reg(n: u8, gender: &str, weight_class: &str) -> Registration {
        Registration {
            registration_id: Uuid::from_u128(n as u128),
            meet_id: Uuid::from_u128(0xABCD),
            gender: gender.to_string(),
            weight_class: weight_class.to_string(),
            division: "open".to_string(),
            equipment: "raw".to_string(),
            status: STATUS_APPROVED.to_string(),
            created_at: ts(),
        }
    }

    fn config(athletes_per_flight: i32, separate_by_gender: bool) -> FlightConfiguration {
        FlightConfiguration {
            athletes_per_flight,
            separate_by_gender,
            ..FlightConfiguration::default()
        }
    }

    fn member_set(flights: &[Flight]) -> HashSet<Uuid> {
        flights
            .iter()
            .flat_map(|f| f.member_ids.iter().copied())
            .collect()
    }

    #[test]
    fn test_weight_class_sort_key_parses_fixed_classes() {
        assert_eq!(weight_class_sort_key("83kg"), 83.0);
        assert_eq!(weight_class_sort_key("59.5kg"), 59.5);
        assert_eq!(weight_class_sort_key("105"), 105.0);
        assert_eq!(weight_class_sort_key(" 74KG "), 74.0);
    }

    #[test]
    fn test_weight_class_sort_key_puts_open_classes_last() {
        assert_eq!(weight_class_sort_key("120+kg"), 1120.0);
        assert_eq!(weight_class_sort_key("120kg+"), 1120.0);
        assert!(weight_class_sort_key("84+kg") > weight_class_sort_key("120kg"));
    }

    #[test]
    fn test_weight_class_sort_key_ranks_malformed_after_fixed_but_before_open() {
        assert_eq!(weight_class_sort_key("heavyweight"), 999.0);
        assert_eq!(weight_class_sort_key(""), 999.0);
        assert!(weight_class_sort_key("junk") > weight_class_sort_key("120kg"));
        assert!(weight_class_sort_key("junk") < weight_class_sort_key("120+kg"));
    }

    #[test]
    fn test_flight_count_handles_edges() {
        assert_eq!(calculate_optimal_flight_count(0, 15), 0);
        assert_eq!(calculate_optimal_flight_count(1, 15), 1);
        assert_eq!(calculate_optimal_flight_count(15, 15), 1);
        assert_eq!(calculate_optimal_flight_count(16, 15), 2);
        assert_eq!(calculate_optimal_flight_count(31, 15), 3);
        assert_eq!(calculate_optimal_flight_count(5, 0), 5);
    }

    #[test]
    fn test_flight_labels_run_alphabetically_then_double_letters() {
        assert_eq!(flight_label(0), "Flight A");
        assert_eq!(flight_label(1), "Flight B");
        assert_eq!(flight_label(25), "Flight Z");
        assert_eq!(flight_label(26), "Flight AA");
        assert_eq!(flight_label(27), "Flight AB");
    }

    #[test]
    fn test_generation_with_no_athletes_yields_no_flights() {
        let flights = generate_flights(&[], &config(15, true));
        assert!(flights.is_empty());
    }

    #[test]
    fn test_group_at_or_under_target_stays_in_one_flight() {
        let registrations: Vec<Registration> =
            (0..15).map(|n| reg(n, GENDER_MALE, "83kg")).collect();

        let flights = generate_flights(&registrations, &config(15, true));

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].member_ids.len(), 15);
        assert_eq!(flights[0].name, "Flight A");
        assert_eq!(flights[0].order, 0);
    }

    #[test]
    fn test_thirty_two_athletes_split_into_three_flights() {
        // 17 men across 66kg..120+kg, 15 women across 47kg..84+kg.
        let male_classes = [
            "66kg", "66kg", "74kg", "74kg", "83kg", "83kg", "93kg", "93kg", "93kg", "105kg",
            "105kg", "105kg", "120kg", "120kg", "120kg", "120+kg", "120+kg",
        ];
        let female_classes = [
            "47kg", "52kg", "52kg", "57kg", "57kg", "63kg", "63kg", "69kg", "69kg", "76kg",
            "76kg", "84kg", "84kg", "84+kg", "84+kg",
        ];

        let mut registrations = Vec::new();
        for (i, class) in male_classes.iter().enumerate() {
            registrations.push(reg(i as u8, GENDER_MALE, class));
        }
        for (i, class) in female_classes.iter().enumerate() {
            registrations.push(reg(100 + i as u8, GENDER_FEMALE, class));
        }

        let flights = generate_flights(&registrations, &config(15, true));

        assert_eq!(flights.len(), 3);
        assert_eq!(flights[0].name, "Flight A");
        assert_eq!(flights[1].name, "Flight B");
        assert_eq!(flights[2].name, "Flight C");
        assert_eq!(flights[0].member_ids.len(), 9);
        assert_eq!(flights[1].member_ids.len(), 8);
        assert_eq!(flights[2].member_ids.len(), 15);
        assert_eq!(
            flights.iter().map(|f| f.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(flights[0].gender.as_deref(), Some(GENDER_MALE));
        assert_eq!(flights[1].gender.as_deref(), Some(GENDER_MALE));
        assert_eq!(flights[2].gender.as_deref(), Some(GENDER_FEMALE));

        // Everyone placed exactly once.
        assert_eq!(member_set(&flights).len(), 32);
        let total: usize = flights.iter().map(|f| f.member_ids.len()).sum();
        assert_eq!(total, 32);

        assert!(validate_flights(&flights, &registrations).is_empty());
    }

    #[test]
    fn test_members_are_sorted_by_weight_class_within_and_across_flights() {
        let registrations = vec![
            reg(1, GENDER_MALE, "120+kg"),
            reg(2, GENDER_MALE, "66kg"),
            reg(3, GENDER_MALE, "heavystuff"),
            reg(4, GENDER_MALE, "93kg"),
            reg(5, GENDER_MALE, "83kg"),
            reg(6, GENDER_MALE, "74kg"),
        ];
        let by_id: HashMap<Uuid, &Registration> = registrations
            .iter()
            .map(|r| (r.registration_id, r))
            .collect();

        let flights = generate_flights(&registrations, &config(3, true));

        assert_eq!(flights.len(), 2);
        let ordered: Vec<f64> = flights
            .iter()
            .flat_map(|f| f.member_ids.iter())
            .map(|id| weight_class_sort_key(&by_id[id].weight_class))
            .collect();
        let mut sorted = ordered.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(ordered, sorted);

        // Malformed class lands after the fixed classes, open class last.
        assert_eq!(flights[1].member_ids, vec![Uuid::from_u128(4), Uuid::from_u128(3), Uuid::from_u128(1)]);
    }

    #[test]
    fn test_equal_weight_classes_keep_input_order() {
        let registrations = vec![
            reg(1, GENDER_FEMALE, "63kg"),
            reg(2, GENDER_FEMALE, "63kg"),
            reg(3, GENDER_FEMALE, "63kg"),
        ];

        let flights = generate_flights(&registrations, &config(15, true));

        assert_eq!(
            flights[0].member_ids,
            vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]
        );
    }

    #[test]
    fn test_gender_separation_never_mixes_a_flight() {
        let mut registrations = Vec::new();
        for n in 0..10 {
            registrations.push(reg(n, GENDER_MALE, "83kg"));
        }
        for n in 10..20 {
            registrations.push(reg(n, GENDER_FEMALE, "63kg"));
        }

        let flights = generate_flights(&registrations, &config(4, true));
        let by_id: HashMap<Uuid, &Registration> = registrations
            .iter()
            .map(|r| (r.registration_id, r))
            .collect();

        for flight in &flights {
            let genders: HashSet<&str> = flight
                .member_ids
                .iter()
                .map(|id| by_id[id].gender.as_str())
                .collect();
            assert_eq!(genders.len(), 1);
        }
        assert_eq!(member_set(&flights).len(), 20);
    }

    #[test]
    fn test_ungendered_generation_uses_one_group_without_restriction() {
        let registrations = vec![
            reg(1, GENDER_MALE, "93kg"),
            reg(2, GENDER_FEMALE, "63kg"),
            reg(3, GENDER_MALE, "74kg"),
        ];

        let flights = generate_flights(&registrations, &config(15, false));

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].gender, None);
        assert_eq!(flights[0].member_ids.len(), 3);
    }

    #[test]
    fn test_unknown_gender_values_still_get_assigned() {
        let registrations = vec![
            reg(1, GENDER_MALE, "93kg"),
            reg(2, "nonbinary", "74kg"),
            reg(3, GENDER_FEMALE, "63kg"),
        ];

        let flights = generate_flights(&registrations, &config(15, true));

        assert_eq!(flights.len(), 3);
        assert_eq!(member_set(&flights).len(), 3);
        assert_eq!(flights[2].gender.as_deref(), Some("nonbinary"));
    }

    #[test]
    fn test_target_of_one_gives_every_athlete_their_own_flight() {
        let registrations = vec![
            reg(1, GENDER_MALE, "74kg"),
            reg(2, GENDER_MALE, "83kg"),
            reg(3, GENDER_MALE, "93kg"),
        ];

        let flights = generate_flights(&registrations, &config(1, true));

        assert_eq!(flights.len(), 3);
        assert!(flights.iter().all(|f| f.member_ids.len() == 1));
    }

    #[test]
    fn test_auto_assignments_cover_every_member_with_auto_origin() {
        let registrations: Vec<Registration> =
            (0..5).map(|n| reg(n, GENDER_MALE, "83kg")).collect();
        let flights = generate_flights(&registrations, &config(2, true));

        let assignments = auto_assignments(&flights);

        assert_eq!(assignments.len(), 5);
        for flight in &flights {
            for member_id in &flight.member_ids {
                let assignment = &assignments[member_id];
                assert_eq!(assignment.flight_id, flight.flight_id);
                assert_eq!(assignment.origin, ORIGIN_AUTO);
            }
        }
    }

    #[test]
    fn test_unassigned_athletes_collapse_into_one_warning() {
        let registrations = vec![
            reg(1, GENDER_MALE, "74kg"),
            reg(2, GENDER_MALE, "83kg"),
            reg(3, GENDER_MALE, "93kg"),
        ];
        let flights = generate_flights(&registrations[..2], &config(15, true));

        let issues = validate_flights(&flights, &registrations);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnassignedAthletes);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
        assert_eq!(issues[0].flight_id, None);
        assert!(issues[0].message.contains('1'));
    }

    #[test]
    fn test_empty_flight_is_a_warning() {
        let registrations = vec![reg(1, GENDER_MALE, "74kg")];
        let mut flights = generate_flights(&registrations, &config(15, true));
        flights[0].member_ids.clear();

        let issues = validate_flights(&flights, &registrations);

        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::EmptyFlight
                && i.severity == IssueSeverity::Warning
                && i.flight_id == Some(flights[0].flight_id)));
    }

    #[test]
    fn test_oversized_flight_is_a_warning() {
        let registrations: Vec<Registration> =
            (0..21).map(|n| reg(n, GENDER_MALE, "83kg")).collect();
        let flights = generate_flights(&registrations, &config(30, true));

        assert_eq!(flights[0].member_ids.len(), 21);
        let issues = validate_flights(&flights, &registrations);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::SizeWarning);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
        assert!(issues[0].message.contains("21"));
    }

    #[test]
    fn test_gender_mix_is_the_only_error_severity_finding() {
        let registrations = vec![
            reg(1, GENDER_MALE, "93kg"),
            reg(2, GENDER_FEMALE, "63kg"),
        ];
        let mut flights = generate_flights(&registrations, &config(15, false));
        flights[0].member_ids = vec![Uuid::from_u128(1), Uuid::from_u128(2)];

        let issues = validate_flights(&flights, &registrations);

        let errors: Vec<&ValidationIssue> = issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, IssueKind::GenderMix);
        assert_eq!(errors[0].flight_id, Some(flights[0].flight_id));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let registrations = vec![
            reg(1, GENDER_MALE, "93kg"),
            reg(2, GENDER_FEMALE, "63kg"),
            reg(3, GENDER_MALE, "74kg"),
        ];
        let flights = generate_flights(&registrations[..2], &config(15, true));

        let first = validate_flights(&flights, &registrations);
        let second = validate_flights(&flights, &registrations);

        assert_eq!(first, second);
    }

    #[test]
    fn test_cleared_state_reports_everyone_unassigned_and_nothing_else() {
        let registrations: Vec<Registration> =
            (0..8).map(|n| reg(n, GENDER_MALE, "83kg")).collect();
        let flights = generate_flights(&registrations, &config(4, true));
        let mut state = MeetFlightState::default();
        state
            .replace_generated(flights, BTreeMap::new(), ts())
            .unwrap();

        state.clear().unwrap();

        let remaining: Vec<Flight> = state.ordered_flights().into_iter().cloned().collect();
        let issues = validate_flights(&remaining, &registrations);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnassignedAthletes);
        assert!(issues[0].message.contains('8'));
    }
}
