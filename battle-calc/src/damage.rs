use std::cmp::Ordering;

use anyhow::Result;
use battle_data::{
    DataStore,
    MoveData,
    SpeciesData,
    Status,
    Type,
};
use indexmap::IndexMap;

use crate::{
    common::Output,
    error::Error,
    hooks,
    power,
    state::{
        Combatant,
        Field,
        MoveInput,
    },
    stats,
    types,
};

/// Input for the damage calculator.
pub struct DamageCalculatorInput<'d> {
    /// Data source.
    pub data: &'d dyn DataStore,
    /// Field state.
    pub field: Field,
    /// Attacker state.
    pub attacker: Combatant,
    /// Defender state.
    pub defender: Combatant,
    /// Move being used.
    pub mov: MoveInput,
}

/// Fully-resolved state for one damage calculation.
pub(crate) struct DamageContext<'d> {
    pub data: &'d dyn DataStore,
    pub field: Field,
    pub attacker: Combatant,
    pub defender: Combatant,
    pub mov: MoveInput,
    pub move_data: MoveData,
    pub attacker_species_data: SpeciesData,
    pub defender_species_data: SpeciesData,
}

impl<'d> TryInto<DamageContext<'d>> for DamageCalculatorInput<'d> {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<DamageContext<'d>> {
        let move_data = self
            .data
            .get_move_by_name(&self.mov.name)?
            .ok_or_else(|| Error::UnknownMove(self.mov.name.clone()))?;
        let attacker_species_data = self
            .data
            .get_species_by_name(&self.attacker.species)?
            .ok_or_else(|| Error::UnknownSpecies(self.attacker.species.clone()))?;
        let defender_species_data = self
            .data
            .get_species_by_name(&self.defender.species)?
            .ok_or_else(|| Error::UnknownSpecies(self.defender.species.clone()))?;
        Ok(DamageContext {
            data: self.data,
            field: self.field,
            attacker: self.attacker,
            defender: self.defender,
            mov: self.mov,
            move_data,
            attacker_species_data,
            defender_species_data,
        })
    }
}

impl DamageContext<'_> {
    /// The type the move attacks with, honoring any caller override.
    pub fn attacking_type(&self) -> Type {
        self.mov
            .type_override
            .unwrap_or(self.move_data.primary_type)
    }
}

/// Record of every intermediate value in one damage calculation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Breakdown {
    /// Why the calculation ended early, if it did.
    pub note: Option<String>,
    pub power: Output<f64>,
    pub attack: Output<f64>,
    pub defense: Output<f64>,
    pub type_effectiveness: Output<f64>,
    pub stab: Output<f64>,
    pub final_modifier: Output<f64>,
    pub crit_modifier: f64,
    pub burn_modifier: f64,
    /// Product of all modifiers applied to the base damage.
    pub total_modifier: f64,
    /// Damage before modifiers and the random roll.
    pub base_damage: f64,
    pub max_hp: u64,
    pub current_hp: u64,
}

/// The possible damage of a single use of a move.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageOutcome {
    /// All 16 damage rolls, sorted ascending.
    ///
    /// A move that cannot deal damage produces a single 0 entry.
    pub damage: Vec<u64>,
    /// Each damage roll as a fraction of the defender's max HP.
    pub percentages: Vec<f64>,
    /// Fraction of rolls that knock the defender out from its current HP.
    pub ko_probability: f64,
    /// Number of hits that guarantee a knockout, or 999 if no damage is dealt.
    pub guaranteed_ko_hits: u32,
    pub breakdown: Breakdown,
}

impl DamageOutcome {
    fn no_damage(breakdown: Breakdown) -> Self {
        Self {
            damage: Vec::from([0]),
            percentages: Vec::from([0.0]),
            ko_probability: 0.0,
            guaranteed_ko_hits: 999,
            breakdown,
        }
    }

    pub fn min_damage(&self) -> u64 {
        self.damage.first().copied().unwrap_or(0)
    }

    pub fn max_damage(&self) -> u64 {
        self.damage.last().copied().unwrap_or(0)
    }

    pub fn average_damage(&self) -> f64 {
        if self.damage.is_empty() {
            return 0.0;
        }
        self.damage.iter().sum::<u64>() as f64 / self.damage.len() as f64
    }
}

/// Is the combatant's state internally consistent against the reference data?
pub fn validate_combatant_state(data: &dyn DataStore, combatant: &Combatant) -> bool {
    match data.get_species_by_name(&combatant.species) {
        Ok(Some(_)) => (),
        _ => return false,
    }
    combatant
        .stats
        .entries()
        .all(|(_, value)| (1..=999).contains(&value))
        && combatant.boosts.in_bounds()
        && (0.0..=1.0).contains(&combatant.hp_fraction)
}

/// Is the move input valid against the reference data?
pub fn validate_move_input(data: &dyn DataStore, mov: &MoveInput) -> bool {
    matches!(data.get_move_by_name(&mov.name), Ok(Some(_)))
        && (0.1..=10.0).contains(&mov.power_multiplier)
}

/// Calculates the possible damage of a single use of a move.
///
/// Status moves, moves with no power, and full type immunity produce an all-zero outcome with a
/// note in the breakdown rather than an error.
pub fn calculate_damage(input: DamageCalculatorInput) -> Result<DamageOutcome> {
    if !(0.1..=10.0).contains(&input.mov.power_multiplier) {
        return Err(Error::Validation(format!(
            "power multiplier {} is out of the [0.1, 10] range",
            input.mov.power_multiplier,
        ))
        .into());
    }
    for combatant in [&input.attacker, &input.defender] {
        if !(0.0..=1.0).contains(&combatant.hp_fraction) {
            return Err(Error::Validation(format!(
                "hp fraction {} for {} is out of the [0, 1] range",
                combatant.hp_fraction, combatant.species,
            ))
            .into());
        }
    }
    let context: DamageContext = input.try_into()?;
    calculate_damage_internal(&context)
}

fn calculate_damage_internal(context: &DamageContext) -> Result<DamageOutcome> {
    let max_hp = u64::from(context.defender.stats.hp);
    let current_hp = (max_hp as f64 * context.defender.hp_fraction).trunc() as u64;
    let mut breakdown = Breakdown {
        crit_modifier: 1.0,
        burn_modifier: 1.0,
        max_hp,
        current_hp,
        ..Default::default()
    };

    if context.move_data.is_status() {
        breakdown.note = Some("Status move deals no damage".to_owned());
        return Ok(DamageOutcome::no_damage(breakdown));
    }

    breakdown.power = power::resolve_power(context)?;
    if *breakdown.power.value() <= 0.0 {
        breakdown.note = Some("Move has no power".to_owned());
        return Ok(DamageOutcome::no_damage(breakdown));
    }

    breakdown.attack = stats::resolve_attack_stat(context)?;
    breakdown.defense = stats::resolve_defense_stat(context)?;

    breakdown.type_effectiveness = types::type_effectiveness(context);
    breakdown.stab = types::stab_modifier(context);
    if *breakdown.type_effectiveness.value() == 0.0 {
        breakdown.note = Some("Move has no effect due to type immunity".to_owned());
        return Ok(DamageOutcome::no_damage(breakdown));
    }

    breakdown.base_damage = base_damage(
        context.attacker.level,
        *breakdown.power.value(),
        *breakdown.attack.value(),
        *breakdown.defense.value(),
    );

    let mut final_modifier = Output::<f64>::from(1.0);
    if let Some(ability) = &context.attacker.ability
        && let Some(hook) =
            hooks::FINAL_DAMAGE_ATTACKER_HOOKS.get(format!("ability:{ability}").as_str())
    {
        hook(context, &mut final_modifier);
    }
    if let Some(ability) = &context.defender.ability
        && let Some(hook) =
            hooks::FINAL_DAMAGE_DEFENDER_HOOKS.get(format!("ability:{ability}").as_str())
    {
        hook(context, &mut final_modifier);
    }
    breakdown.final_modifier = final_modifier;

    breakdown.crit_modifier = if context.mov.crit { 1.5 } else { 1.0 };
    breakdown.burn_modifier = burn_modifier(context);
    breakdown.total_modifier = *breakdown.type_effectiveness.value()
        * *breakdown.stab.value()
        * *breakdown.final_modifier.value()
        * breakdown.crit_modifier
        * breakdown.burn_modifier;

    let damage = damage_rolls(breakdown.base_damage, breakdown.total_modifier);
    let percentages = damage
        .iter()
        .map(|damage| *damage as f64 / max_hp as f64)
        .collect();
    let ko_probability = ko_probability(&damage, current_hp);
    let guaranteed_ko_hits = guaranteed_ko_hits(&damage, current_hp);

    Ok(DamageOutcome {
        damage,
        percentages,
        ko_probability,
        guaranteed_ko_hits,
        breakdown,
    })
}

fn base_damage(level: u64, power: f64, attack: f64, defense: f64) -> f64 {
    (((level as f64 * 0.4 + 2.0) * power * attack / defense) / 50.0 + 2.0).trunc()
}

/// Halves damage when the attacker is burned and using a physical move.
///
/// Applied on top of the attack stat drop, matching the established calculation.
fn burn_modifier(context: &DamageContext) -> f64 {
    if context.attacker.status == Status::Burn
        && context.move_data.is_physical()
        && !context.attacker.has_ability(["Guts"])
    {
        0.5
    } else {
        1.0
    }
}

/// The 16 damage rolls, at 85% through 100% of the modified damage, sorted ascending.
///
/// Every roll deals at least 1 damage.
fn damage_rolls(base_damage: f64, modifier: f64) -> Vec<u64> {
    let mut rolls = (0..16)
        .map(|i| {
            let random_factor = 0.85 + f64::from(i) * 0.01;
            let roll = (base_damage * modifier * random_factor).trunc();
            if roll < 1.0 { 1 } else { roll as u64 }
        })
        .collect::<Vec<_>>();
    rolls.sort_unstable();
    rolls
}

fn ko_probability(damage: &[u64], current_hp: u64) -> f64 {
    if damage.is_empty() {
        return 0.0;
    }
    let ko_count = damage.iter().filter(|damage| **damage >= current_hp).count();
    ko_count as f64 / damage.len() as f64
}

fn guaranteed_ko_hits(damage: &[u64], current_hp: u64) -> u32 {
    let max_damage = match damage.iter().max() {
        Some(max_damage) => *max_damage,
        None => return 999,
    };
    if max_damage >= current_hp {
        1
    } else if max_damage == 0 {
        999
    } else {
        (current_hp as f64 / max_damage as f64).ceil() as u32
    }
}

/// Deeper analysis of one damage calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum DamageAnalysis {
    /// The move cannot deal damage.
    NoDamage { reason: String },
    /// The move deals damage; the full roll distribution is analyzed.
    Range(DamageRangeAnalysis),
}

/// Distribution analysis over all 16 damage rolls.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageRangeAnalysis {
    /// Count of rolls per distinct damage value, in ascending damage order.
    pub damage_distribution: IndexMap<u64, u32>,
    pub min_damage: u64,
    pub max_damage: u64,
    pub average_damage: f64,
    /// Percentage of the defender's max HP, 0 to 100.
    pub min_percentage: f64,
    pub max_percentage: f64,
    pub average_percentage: f64,
    pub ko_probability: f64,
    pub guaranteed_ko_hits: u32,
    /// Knockout probability by hit count, for 1 through 5 hits.
    ///
    /// The single-hit entry is exact. Multi-hit entries are present only when the average roll
    /// reaches the defender's current HP in that many hits.
    pub ko_analysis: IndexMap<u32, f64>,
    pub breakdown: Breakdown,
}

/// Calculates damage and analyzes the roll distribution.
pub fn analyze_damage_range(input: DamageCalculatorInput) -> Result<DamageAnalysis> {
    let outcome = calculate_damage(input)?;
    if outcome.damage.is_empty() || outcome.max_damage() == 0 {
        return Ok(DamageAnalysis::NoDamage {
            reason: outcome
                .breakdown
                .note
                .unwrap_or_else(|| "Unknown".to_owned()),
        });
    }

    let max_hp = outcome.breakdown.max_hp;
    let current_hp = outcome.breakdown.current_hp;

    let mut damage_distribution = IndexMap::new();
    for damage in &outcome.damage {
        *damage_distribution.entry(*damage).or_insert(0u32) += 1;
    }

    let average_damage = outcome.average_damage();
    let mut ko_analysis = IndexMap::new();
    for hits in 1..=5u32 {
        if hits == 1 {
            ko_analysis.insert(hits, ko_probability(&outcome.damage, current_hp));
        } else if average_damage * f64::from(hits) >= current_hp as f64 {
            ko_analysis.insert(hits, 1.0);
        }
    }

    Ok(DamageAnalysis::Range(DamageRangeAnalysis {
        damage_distribution,
        min_damage: outcome.min_damage(),
        max_damage: outcome.max_damage(),
        average_damage,
        min_percentage: outcome.min_damage() as f64 / max_hp as f64 * 100.0,
        max_percentage: outcome.max_damage() as f64 / max_hp as f64 * 100.0,
        average_percentage: average_damage / max_hp as f64 * 100.0,
        ko_probability: outcome.ko_probability,
        guaranteed_ko_hits: outcome.guaranteed_ko_hits,
        ko_analysis,
        breakdown: outcome.breakdown,
    }))
}

/// One move's entry in a move comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMove {
    pub move_name: String,
    pub analysis: DamageAnalysis,
}

impl RankedMove {
    fn average_damage(&self) -> f64 {
        match &self.analysis {
            DamageAnalysis::Range(analysis) => analysis.average_damage,
            DamageAnalysis::NoDamage { .. } => 0.0,
        }
    }
}

/// Analyzes several moves against the same defender and ranks them by average damage.
///
/// Damaging moves come first, in descending average damage order. Moves that cannot deal damage
/// (including moves whose calculation failed) follow in input order.
pub fn compare_moves(
    data: &dyn DataStore,
    field: &Field,
    attacker: &Combatant,
    defender: &Combatant,
    moves: &[MoveInput],
) -> Vec<RankedMove> {
    let mut ranked = Vec::new();
    let mut no_damage = Vec::new();
    for mov in moves {
        let analysis = match analyze_damage_range(DamageCalculatorInput {
            data,
            field: field.clone(),
            attacker: attacker.clone(),
            defender: defender.clone(),
            mov: mov.clone(),
        }) {
            Ok(analysis) => analysis,
            Err(error) => {
                log::error!("failed to calculate damage for {}: {error:#}", mov.name);
                DamageAnalysis::NoDamage {
                    reason: format!("{error:#}"),
                }
            }
        };
        let entry = RankedMove {
            move_name: mov.name.clone(),
            analysis,
        };
        match &entry.analysis {
            DamageAnalysis::Range(_) => ranked.push(entry),
            DamageAnalysis::NoDamage { .. } => no_damage.push(entry),
        }
    }
    ranked.sort_by(|a, b| {
        b.average_damage()
            .partial_cmp(&a.average_damage())
            .unwrap_or(Ordering::Equal)
    });
    ranked.extend(no_damage);
    ranked
}

#[cfg(test)]
mod damage_test {
    use assert_matches::assert_matches;
    use battle_data::Status;
    use pretty_assertions::assert_eq;

    use crate::{
        damage::{
            DamageAnalysis,
            DamageCalculatorInput,
            analyze_damage_range,
            calculate_damage,
            compare_moves,
            validate_combatant_state,
            validate_move_input,
        },
        state::{
            Combatant,
            Field,
            MoveInput,
        },
        test_util,
    };

    fn input<'d>(
        data: &'d battle_data::StaticDataStore,
        attacker: Combatant,
        defender: Combatant,
        mov: MoveInput,
    ) -> DamageCalculatorInput<'d> {
        DamageCalculatorInput {
            data,
            field: Field::default(),
            attacker,
            defender,
            mov,
        }
    }

    fn neutral_matchup() -> (Combatant, Combatant) {
        // Machamp's Thunderbolt against Snorlax is neutral with no modifiers at all.
        let mut attacker = Combatant::new("Machamp");
        attacker.stats.spa = 150;
        let mut defender = Combatant::new("Snorlax");
        defender.stats.spd = 100;
        defender.stats.hp = 155;
        (attacker, defender)
    }

    #[test]
    fn produces_sixteen_sorted_rolls() {
        let data = test_util::data();
        let (attacker, defender) = neutral_matchup();
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(output) => {
                assert_eq!(output.damage.len(), 16);
                assert!(output.damage.is_sorted());
                // ((50 * 0.4 + 2) * 90 * 150 / 100) / 50 + 2 = 61.4.
                assert_eq!(output.breakdown.base_damage, 61.0);
                assert_eq!(output.min_damage(), 51);
                assert_eq!(output.max_damage(), 61);
                assert_eq!(output.percentages[0], 51.0 / 155.0);
                assert_eq!(output.guaranteed_ko_hits, 3);
            }
        );
    }

    #[test]
    fn stab_multiplies_damage() {
        let data = test_util::data();
        let mut attacker = Combatant::new("Pikachu");
        attacker.stats.spa = 150;
        let mut defender = Combatant::new("Snorlax");
        defender.stats.spd = 100;
        defender.stats.hp = 155;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(output) => {
                assert_eq!(*output.breakdown.stab.value(), 1.5);
                assert_eq!(output.max_damage(), 91);
            }
        );
    }

    #[test]
    fn status_move_deals_no_damage() {
        let data = test_util::data();
        let (attacker, defender) = neutral_matchup();
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Swords Dance"))),
            Ok(output) => {
                assert_eq!(output.damage, vec![0]);
                assert_eq!(output.percentages, vec![0.0]);
                assert_eq!(output.ko_probability, 0.0);
                assert_eq!(output.guaranteed_ko_hits, 999);
                assert_eq!(
                    output.breakdown.note.as_deref(),
                    Some("Status move deals no damage"),
                );
            }
        );
    }

    #[test]
    fn type_immunity_deals_no_damage() {
        let data = test_util::data();
        let mut attacker = Combatant::new("Snorlax");
        attacker.stats.atk = 110;
        let mut defender = Combatant::new("Gengar");
        defender.stats.def = 80;
        defender.stats.hp = 135;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Body Slam"))),
            Ok(output) => {
                assert_eq!(output.damage, vec![0]);
                assert_eq!(output.ko_probability, 0.0);
                assert_eq!(output.guaranteed_ko_hits, 999);
                assert_eq!(
                    output.breakdown.note.as_deref(),
                    Some("Move has no effect due to type immunity"),
                );
            }
        );
    }

    #[test]
    fn every_roll_deals_at_least_one_damage() {
        let data = test_util::data();
        let mut attacker = Combatant::new("Machamp");
        attacker.level = 1;
        attacker.stats.spa = 10;
        let mut defender = Combatant::new("Pikachu");
        defender.stats.spd = 200;
        defender.stats.hp = 35;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(output) => {
                // Base damage 2 into a 0.5x resist: every roll truncates below 1.
                assert_eq!(output.breakdown.base_damage, 2.0);
                assert_eq!(output.breakdown.total_modifier, 0.5);
                assert_eq!(output.damage, vec![1; 16]);
                assert_eq!(output.ko_probability, 0.0);
                assert_eq!(output.guaranteed_ko_hits, 35);
            }
        );
    }

    #[test]
    fn filter_dampens_super_effective_damage_twice() {
        let data = test_util::data();
        let (attacker, _) = neutral_matchup();
        let mut defender = Combatant::new("Gyarados");
        defender.ability = Some("Filter".to_owned());
        defender.stats.spd = 100;
        defender.stats.hp = 155;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(output) => {
                // Electric is 4x into Water/Flying, dampened once per stage.
                assert_eq!(*output.breakdown.type_effectiveness.value(), 3.0);
                assert_eq!(*output.breakdown.final_modifier.value(), 0.75);
                assert_eq!(output.breakdown.total_modifier, 2.25);
                assert_eq!(output.min_damage(), 116);
                assert_eq!(output.max_damage(), 137);
            }
        );
    }

    #[test]
    fn sniper_amplifies_critical_hits() {
        let data = test_util::data();
        let (mut attacker, defender) = neutral_matchup();
        attacker.ability = Some("Sniper".to_owned());
        let mut mov = MoveInput::new("Thunderbolt");
        mov.crit = true;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, mov)),
            Ok(output) => {
                assert_eq!(*output.breakdown.final_modifier.value(), 1.5);
                assert_eq!(output.breakdown.crit_modifier, 1.5);
                assert_eq!(output.breakdown.total_modifier, 2.25);
                assert_eq!(output.max_damage(), 137);
            }
        );
    }

    #[test]
    fn tinted_lens_cancels_a_resist() {
        let data = test_util::data();
        let (mut attacker, _) = neutral_matchup();
        attacker.ability = Some("Tinted Lens".to_owned());
        let mut defender = Combatant::new("Pikachu");
        defender.stats.spd = 100;
        defender.stats.hp = 110;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(output) => {
                assert_eq!(*output.breakdown.type_effectiveness.value(), 0.5);
                assert_eq!(*output.breakdown.final_modifier.value(), 2.0);
                assert_eq!(output.breakdown.total_modifier, 1.0);
                assert_eq!(output.max_damage(), 61);
            }
        );
    }

    #[test]
    fn crit_and_burn_scale_the_total_modifier() {
        let data = test_util::data();
        let mut attacker = Combatant::new("Machamp");
        attacker.stats.atk = 150;
        attacker.status = Status::Burn;
        let mut defender = Combatant::new("Snorlax");
        defender.stats.def = 100;
        defender.stats.hp = 155;
        let mut mov = MoveInput::new("Body Slam");
        mov.crit = true;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, mov)),
            Ok(output) => {
                assert_eq!(output.breakdown.crit_modifier, 1.5);
                assert_eq!(output.breakdown.burn_modifier, 0.5);
                // Burn also halves the attack stat itself.
                assert!(
                    output
                        .breakdown
                        .attack
                        .description()
                        .iter()
                        .any(|line| line.contains("Burn")),
                );
            }
        );
    }

    #[test]
    fn ko_probability_counts_lethal_rolls() {
        let data = test_util::data();
        let (attacker, mut defender) = neutral_matchup();
        // Current HP of 55: rolls are 51..=61, and 10 of 16 reach 55.
        defender.hp_fraction = 0.355;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(output) => {
                assert_eq!(output.breakdown.current_hp, 55);
                assert_eq!(output.ko_probability, 10.0 / 16.0);
                assert_eq!(output.guaranteed_ko_hits, 1);
            }
        );
    }

    #[test]
    fn out_of_bounds_power_multiplier_is_rejected() {
        let data = test_util::data();
        let (attacker, defender) = neutral_matchup();
        let mut mov = MoveInput::new("Thunderbolt");
        mov.power_multiplier = 0.05;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, mov)),
            Err(error) => assert!(error.to_string().contains("power multiplier"))
        );
    }

    #[test]
    fn out_of_bounds_hp_fraction_is_rejected() {
        let data = test_util::data();
        let (attacker, mut defender) = neutral_matchup();
        defender.hp_fraction = 1.5;
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Err(error) => assert!(error.to_string().contains("hp fraction"))
        );
    }

    #[test]
    fn unknown_move_is_an_error() {
        let data = test_util::data();
        let (attacker, defender) = neutral_matchup();
        assert_matches!(
            calculate_damage(input(&data, attacker, defender, MoveInput::new("Splash Dance"))),
            Err(error) => {
                assert_eq!(error.to_string(), "move Splash Dance does not exist");
            }
        );
    }

    #[test]
    fn analyzes_roll_distribution() {
        let data = test_util::data();
        let (attacker, defender) = neutral_matchup();
        assert_matches!(
            analyze_damage_range(input(&data, attacker, defender, MoveInput::new("Thunderbolt"))),
            Ok(DamageAnalysis::Range(analysis)) => {
                assert_eq!(analysis.min_damage, 51);
                assert_eq!(analysis.max_damage, 61);
                assert_eq!(
                    analysis.damage_distribution.values().sum::<u32>(),
                    16,
                );
                // Distribution keys follow ascending roll order.
                assert!(analysis.damage_distribution.keys().is_sorted());
                assert_eq!(analysis.max_percentage, 61.0 / 155.0 * 100.0);
                assert_eq!(analysis.guaranteed_ko_hits, 3);
                // One hit never knocks out, but three average hits do.
                assert_eq!(analysis.ko_analysis.get(&1), Some(&0.0));
                assert_eq!(analysis.ko_analysis.get(&2), None);
                assert_eq!(analysis.ko_analysis.get(&3), Some(&1.0));
            }
        );
    }

    #[test]
    fn analysis_reports_no_damage_reason() {
        let data = test_util::data();
        let attacker = Combatant::new("Snorlax");
        let mut defender = Combatant::new("Gengar");
        defender.stats.hp = 135;
        assert_matches!(
            analyze_damage_range(input(&data, attacker, defender, MoveInput::new("Body Slam"))),
            Ok(DamageAnalysis::NoDamage { reason }) => {
                assert_eq!(reason, "Move has no effect due to type immunity");
            }
        );
    }

    #[test]
    fn ranks_moves_by_average_damage() {
        let data = test_util::data();
        let mut attacker = Combatant::new("Pikachu");
        attacker.stats.atk = 100;
        attacker.stats.spa = 120;
        let mut defender = Combatant::new("Gyarados");
        defender.stats.def = 100;
        defender.stats.spd = 120;
        defender.stats.hp = 170;
        let moves = [
            MoveInput::new("Swords Dance"),
            MoveInput::new("Ice Punch"),
            MoveInput::new("Splash Dance"),
            MoveInput::new("Thunderbolt"),
        ];
        let ranked = compare_moves(&data, &Field::default(), &attacker, &defender, &moves);
        assert_eq!(
            ranked
                .iter()
                .map(|entry| entry.move_name.as_str())
                .collect::<Vec<_>>(),
            // Damaging moves by average damage, then no-damage moves in input order.
            vec!["Thunderbolt", "Ice Punch", "Swords Dance", "Splash Dance"],
        );
        assert_matches!(
            &ranked[3].analysis,
            DamageAnalysis::NoDamage { reason } => {
                assert!(reason.contains("does not exist"));
            }
        );
    }

    #[test]
    fn validates_combatant_state() {
        let data = test_util::data();
        let mut combatant = Combatant::new("Pikachu");
        combatant.stats = crate::stats::derive_stats(&data, "Pikachu", 50, "Hardy", None, None)
            .unwrap();
        assert!(validate_combatant_state(&data, &combatant));

        combatant.boosts.atk = 7;
        assert!(!validate_combatant_state(&data, &combatant));
        combatant.boosts.atk = 0;

        combatant.hp_fraction = -0.1;
        assert!(!validate_combatant_state(&data, &combatant));
        combatant.hp_fraction = 1.0;

        combatant.species = "Missingno".to_owned();
        assert!(!validate_combatant_state(&data, &combatant));
    }

    #[test]
    fn validates_move_input() {
        let data = test_util::data();
        assert!(validate_move_input(&data, &MoveInput::new("Thunderbolt")));
        assert!(!validate_move_input(&data, &MoveInput::new("Splash Dance")));

        let mut mov = MoveInput::new("Thunderbolt");
        mov.power_multiplier = 20.0;
        assert!(!validate_move_input(&data, &mov));
    }
}
