use crate::error::HeroError;
use crate::json::{normalize, number};
use serde_json::{Map, Value};
use std::fmt;

/// Primary attribute of a hero.
///
/// The upstream API uses short wire tokens for these (`str`, `agi`, `int`, `all`).
///
/// # Examples
///
/// ```
/// use dota_heroes::model::HeroAttribute;
///
/// assert_eq!(HeroAttribute::from_wire("all"), Some(HeroAttribute::Universal));
/// assert_eq!(HeroAttribute::Universal.title(), "Universal");
/// assert_eq!(HeroAttribute::from_wire("Strength"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroAttribute {
    Strength,
    Agility,
    Intelligence,
    Universal,
}

impl HeroAttribute {
    pub const ALL: [HeroAttribute; 4] = [
        HeroAttribute::Strength,
        HeroAttribute::Agility,
        HeroAttribute::Intelligence,
        HeroAttribute::Universal,
    ];

    pub fn wire_token(&self) -> &'static str {
        match self {
            HeroAttribute::Strength => "str",
            HeroAttribute::Agility => "agi",
            HeroAttribute::Intelligence => "int",
            HeroAttribute::Universal => "all",
        }
    }

    /// Human-readable name shown next to the attribute icon.
    pub fn title(&self) -> &'static str {
        match self {
            HeroAttribute::Strength => "Strength",
            HeroAttribute::Agility => "Agility",
            HeroAttribute::Intelligence => "Intelligence",
            HeroAttribute::Universal => "Universal",
        }
    }

    /// Exact, case-sensitive match against the wire tokens.
    pub fn from_wire(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.wire_token() == token)
    }
}

/// Melee or ranged attacker. Wire tokens are the English words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackType {
    Melee,
    Ranged,
}

impl AttackType {
    pub const ALL: [AttackType; 2] = [AttackType::Melee, AttackType::Ranged];

    pub fn wire_token(&self) -> &'static str {
        match self {
            AttackType::Melee => "Melee",
            AttackType::Ranged => "Ranged",
        }
    }

    pub fn from_wire(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.wire_token() == token)
    }
}

/// Gameplay role tag. A hero lists zero or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroRole {
    Carry,
    Support,
    Nuker,
    Disabler,
    Jungler,
    Durable,
    Escape,
    Pusher,
    Initiator,
}

impl HeroRole {
    pub const ALL: [HeroRole; 9] = [
        HeroRole::Carry,
        HeroRole::Support,
        HeroRole::Nuker,
        HeroRole::Disabler,
        HeroRole::Jungler,
        HeroRole::Durable,
        HeroRole::Escape,
        HeroRole::Pusher,
        HeroRole::Initiator,
    ];

    pub fn wire_token(&self) -> &'static str {
        match self {
            HeroRole::Carry => "Carry",
            HeroRole::Support => "Support",
            HeroRole::Nuker => "Nuker",
            HeroRole::Disabler => "Disabler",
            HeroRole::Jungler => "Jungler",
            HeroRole::Durable => "Durable",
            HeroRole::Escape => "Escape",
            HeroRole::Pusher => "Pusher",
            HeroRole::Initiator => "Initiator",
        }
    }

    pub fn from_wire(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.wire_token() == token)
    }
}

macro_rules! wire_str_impls {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.wire_token())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = HeroError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_wire(s).ok_or_else(|| HeroError::UnknownToken {
                    kind: $kind,
                    token: s.to_string(),
                })
            }
        }
    };
}

wire_str_impls!(HeroAttribute, "attribute");
wire_str_impls!(AttackType, "attack type");
wire_str_impls!(HeroRole, "role");

/// A hero as reported by the `heroStats` endpoint.
///
/// Every field is optional: `None` means upstream did not send it, sent
/// `null`, or sent something outside the recognized set for that field.
/// Keys the record does not model are kept in `extra`, already camelCased,
/// as are scalar values the typed field can't hold (a string `baseHealth`).
///
/// # Examples
///
/// ```
/// use dota_heroes::model::{AttackType, Hero, HeroAttribute, HeroRole};
/// use serde_json::json;
///
/// let hero = Hero::from_json(&json!({
///     "primary_attr": "agi",
///     "attack_type": "Melee",
///     "roles": ["Carry", "NotARealRole"],
/// }));
/// assert_eq!(hero.primary_attr, Some(HeroAttribute::Agility));
/// assert_eq!(hero.attack_type, Some(AttackType::Melee));
/// assert_eq!(hero.roles, vec![Some(HeroRole::Carry), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hero {
    pub id: Option<u32>,
    /// Internal name, e.g. `npc_dota_hero_antimage`
    pub name: Option<String>,
    pub localized_name: Option<String>,
    pub primary_attr: Option<HeroAttribute>,
    pub attack_type: Option<AttackType>,
    /// Unrecognized role tokens stay in place as `None`
    pub roles: Vec<Option<HeroRole>>,
    /// Portrait path relative to the image host
    pub img: Option<String>,
    /// Icon path relative to the image host
    pub icon: Option<String>,
    pub base_health: Option<f64>,
    pub base_health_regen: Option<f64>,
    pub base_mana: Option<f64>,
    pub base_mana_regen: Option<f64>,
    pub base_armor: Option<f64>,
    /// Base magic resistance, in percent
    pub base_mr: Option<f64>,
    pub base_attack_min: Option<f64>,
    pub base_attack_max: Option<f64>,
    pub base_str: Option<f64>,
    pub base_agi: Option<f64>,
    pub base_int: Option<f64>,
    pub str_gain: Option<f64>,
    pub agi_gain: Option<f64>,
    pub int_gain: Option<f64>,
    pub attack_range: Option<f64>,
    pub projectile_speed: Option<f64>,
    pub attack_rate: Option<f64>,
    pub base_attack_time: Option<f64>,
    pub attack_point: Option<f64>,
    pub move_speed: Option<f64>,
    pub turn_rate: Option<f64>,
    /// Available in Captains Mode
    pub cm_enabled: Option<bool>,
    pub legs: Option<u32>,
    pub day_vision: Option<f64>,
    pub night_vision: Option<f64>,
    pub extra: Map<String, Value>,
}

impl Hero {
    /// Build a hero from one raw (snake_case) element of the `heroStats` array.
    ///
    /// Never fails. A non-object input gives `Hero::default()`.
    pub fn from_json(raw: &Value) -> Hero {
        let mut hero = Hero::default();
        let obj = match normalize(raw) {
            Value::Object(obj) => obj,
            other => {
                log::debug!("hero payload is a {}, not an object", crate::json::kind_of(&other));
                return hero;
            }
        };

        let mut extra = Map::new();
        for (key, value) in obj {
            match key.as_str() {
                "id" => hero.id = typed(as_u32(&value), key, value, &mut extra),
                "name" => hero.name = typed(as_string(&value), key, value, &mut extra),
                "localizedName" => hero.localized_name = typed(as_string(&value), key, value, &mut extra),
                "primaryAttr" => hero.primary_attr = value.as_str().and_then(HeroAttribute::from_wire),
                "attackType" => hero.attack_type = value.as_str().and_then(AttackType::from_wire),
                "roles" => hero.roles = narrow_roles(&value),
                "img" => hero.img = typed(as_string(&value), key, value, &mut extra),
                "icon" => hero.icon = typed(as_string(&value), key, value, &mut extra),
                "baseHealth" => hero.base_health = typed(value.as_f64(), key, value, &mut extra),
                "baseHealthRegen" => hero.base_health_regen = typed(value.as_f64(), key, value, &mut extra),
                "baseMana" => hero.base_mana = typed(value.as_f64(), key, value, &mut extra),
                "baseManaRegen" => hero.base_mana_regen = typed(value.as_f64(), key, value, &mut extra),
                "baseArmor" => hero.base_armor = typed(value.as_f64(), key, value, &mut extra),
                "baseMr" => hero.base_mr = typed(value.as_f64(), key, value, &mut extra),
                "baseAttackMin" => hero.base_attack_min = typed(value.as_f64(), key, value, &mut extra),
                "baseAttackMax" => hero.base_attack_max = typed(value.as_f64(), key, value, &mut extra),
                "baseStr" => hero.base_str = typed(value.as_f64(), key, value, &mut extra),
                "baseAgi" => hero.base_agi = typed(value.as_f64(), key, value, &mut extra),
                "baseInt" => hero.base_int = typed(value.as_f64(), key, value, &mut extra),
                "strGain" => hero.str_gain = typed(value.as_f64(), key, value, &mut extra),
                "agiGain" => hero.agi_gain = typed(value.as_f64(), key, value, &mut extra),
                "intGain" => hero.int_gain = typed(value.as_f64(), key, value, &mut extra),
                "attackRange" => hero.attack_range = typed(value.as_f64(), key, value, &mut extra),
                "projectileSpeed" => hero.projectile_speed = typed(value.as_f64(), key, value, &mut extra),
                "attackRate" => hero.attack_rate = typed(value.as_f64(), key, value, &mut extra),
                "baseAttackTime" => hero.base_attack_time = typed(value.as_f64(), key, value, &mut extra),
                "attackPoint" => hero.attack_point = typed(value.as_f64(), key, value, &mut extra),
                "moveSpeed" => hero.move_speed = typed(value.as_f64(), key, value, &mut extra),
                "turnRate" => hero.turn_rate = typed(value.as_f64(), key, value, &mut extra),
                "cmEnabled" => hero.cm_enabled = typed(value.as_bool(), key, value, &mut extra),
                "legs" => hero.legs = typed(as_u32(&value), key, value, &mut extra),
                "dayVision" => hero.day_vision = typed(value.as_f64(), key, value, &mut extra),
                "nightVision" => hero.night_vision = typed(value.as_f64(), key, value, &mut extra),
                _ => {
                    extra.insert(key, value);
                }
            }
        }
        hero.extra = extra;
        hero
    }

    /// Project the hero back to a camelCase JSON object.
    ///
    /// Enum fields are written as wire tokens, absent fields are left out and
    /// `extra` entries follow the modelled fields.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = self.id {
            map.insert("id".to_string(), Value::Number(id.into()));
        }
        put_str(&mut map, "name", &self.name);
        put_str(&mut map, "localizedName", &self.localized_name);
        if let Some(attr) = self.primary_attr {
            map.insert("primaryAttr".to_string(), Value::String(attr.wire_token().to_string()));
        }
        if let Some(attack) = self.attack_type {
            map.insert("attackType".to_string(), Value::String(attack.wire_token().to_string()));
        }
        let roles = self
            .roles
            .iter()
            .map(|r| match r {
                Some(role) => Value::String(role.wire_token().to_string()),
                None => Value::Null,
            })
            .collect();
        map.insert("roles".to_string(), Value::Array(roles));
        put_str(&mut map, "img", &self.img);
        put_str(&mut map, "icon", &self.icon);

        let numbers = [
            ("baseHealth", self.base_health),
            ("baseHealthRegen", self.base_health_regen),
            ("baseMana", self.base_mana),
            ("baseManaRegen", self.base_mana_regen),
            ("baseArmor", self.base_armor),
            ("baseMr", self.base_mr),
            ("baseAttackMin", self.base_attack_min),
            ("baseAttackMax", self.base_attack_max),
            ("baseStr", self.base_str),
            ("baseAgi", self.base_agi),
            ("baseInt", self.base_int),
            ("strGain", self.str_gain),
            ("agiGain", self.agi_gain),
            ("intGain", self.int_gain),
            ("attackRange", self.attack_range),
            ("projectileSpeed", self.projectile_speed),
            ("attackRate", self.attack_rate),
            ("baseAttackTime", self.base_attack_time),
            ("attackPoint", self.attack_point),
            ("moveSpeed", self.move_speed),
            ("turnRate", self.turn_rate),
        ];
        for (key, value) in numbers {
            if let Some(v) = value {
                map.insert(key.to_string(), number(v));
            }
        }
        if let Some(cm) = self.cm_enabled {
            map.insert("cmEnabled".to_string(), Value::Bool(cm));
        }
        if let Some(legs) = self.legs {
            map.insert("legs".to_string(), Value::Number(legs.into()));
        }
        if let Some(v) = self.day_vision {
            map.insert("dayVision".to_string(), number(v));
        }
        if let Some(v) = self.night_vision {
            map.insert("nightVision".to_string(), number(v));
        }

        for (key, value) in &self.extra {
            map.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Value::Object(map)
    }

    /// Roles that matched a known token, in order.
    pub fn recognized_roles(&self) -> impl Iterator<Item = HeroRole> + '_ {
        self.roles.iter().flatten().copied()
    }

    /// Display name, falling back to the internal name.
    pub fn display_name(&self) -> &str {
        self.localized_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("")
    }
}

fn narrow_roles(value: &Value) -> Vec<Option<HeroRole>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().and_then(HeroRole::from_wire))
            .collect(),
        _ => Vec::new(),
    }
}

/// A value the typed field can't hold is kept in `extra` so it still reaches `to_json`.
fn typed<T>(parsed: Option<T>, key: String, value: Value, extra: &mut Map<String, Value>) -> Option<T> {
    if parsed.is_none() && !value.is_null() {
        log::debug!("keeping {} as an untyped field", key);
        extra.insert(key, value);
    }
    parsed
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// Whole numbers in range, including ones written as `1.0`.
fn as_u32(value: &Value) -> Option<u32> {
    if let Some(v) = value.as_u64() {
        return u32::try_from(v).ok();
    }
    value
        .as_f64()
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}

fn put_str(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(s) = value {
        map.insert(key.to_string(), Value::String(s.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn anti_mage() -> Value {
        json!({
            "id": 1,
            "name": "npc_dota_hero_antimage",
            "localized_name": "Anti-Mage",
            "primary_attr": "agi",
            "attack_type": "Melee",
            "roles": ["Carry", "Escape", "Nuker"],
            "img": "/apps/dota2/images/dota_react/heroes/antimage.png?",
            "icon": "/apps/dota2/images/dota_react/heroes/icons/antimage.png?",
            "base_health": 120,
            "base_health_regen": 0.25,
            "base_mana": 75,
            "base_mana_regen": 0,
            "base_armor": 1,
            "base_mr": 25,
            "base_attack_min": 29,
            "base_attack_max": 33,
            "base_str": 21,
            "base_agi": 24,
            "base_int": 12,
            "str_gain": 1.6,
            "agi_gain": 2.8,
            "int_gain": 1.8,
            "attack_range": 150,
            "projectile_speed": 0,
            "attack_rate": 1.4,
            "base_attack_time": 100,
            "attack_point": 0.3,
            "move_speed": 310,
            "turn_rate": null,
            "cm_enabled": true,
            "legs": 2,
            "day_vision": 1800,
            "night_vision": 800,
            "pro_pick": 120,
            "1_pick": 5000
        })
    }

    #[test]
    fn test_from_json_full_record() {
        let hero = Hero::from_json(&anti_mage());
        assert_eq!(hero.id, Some(1));
        assert_eq!(hero.name.as_deref(), Some("npc_dota_hero_antimage"));
        assert_eq!(hero.localized_name.as_deref(), Some("Anti-Mage"));
        assert_eq!(hero.primary_attr, Some(HeroAttribute::Agility));
        assert_eq!(hero.attack_type, Some(AttackType::Melee));
        assert_eq!(
            hero.roles,
            vec![Some(HeroRole::Carry), Some(HeroRole::Escape), Some(HeroRole::Nuker)]
        );
        assert_eq!(hero.base_health, Some(120.0));
        assert_eq!(hero.base_health_regen, Some(0.25));
        assert_eq!(hero.agi_gain, Some(2.8));
        assert_eq!(hero.turn_rate, None);
        assert_eq!(hero.cm_enabled, Some(true));
        assert_eq!(hero.legs, Some(2));
        assert_eq!(hero.night_vision, Some(800.0));
        assert_eq!(hero.extra.get("proPick"), Some(&json!(120)));
        assert_eq!(hero.extra.get("1Pick"), Some(&json!(5000)));
        assert_eq!(hero.extra.get("1_pick"), None);
    }

    #[test]
    fn test_from_json_narrows_unknown_tokens() {
        let hero = Hero::from_json(&json!({
            "primary_attr": "Strength",
            "attack_type": "melee",
            "roles": ["Carry", "NotARealRole", 7, null, "Carry"]
        }));
        assert_eq!(hero.primary_attr, None);
        assert_eq!(hero.attack_type, None);
        assert_eq!(
            hero.roles,
            vec![Some(HeroRole::Carry), None, None, None, Some(HeroRole::Carry)]
        );
        assert_eq!(hero.recognized_roles().collect::<Vec<_>>(), [HeroRole::Carry, HeroRole::Carry]);
    }

    #[test]
    fn test_from_json_roles_absent_or_malformed() {
        assert!(Hero::from_json(&json!({})).roles.is_empty());
        assert!(Hero::from_json(&json!({"roles": null})).roles.is_empty());
        assert!(Hero::from_json(&json!({"roles": "Carry"})).roles.is_empty());
    }

    #[test]
    fn test_from_json_wrong_types_move_to_extra() {
        let hero = Hero::from_json(&json!({
            "id": -4,
            "base_health": "lots",
            "primary_attr": 3,
            "localized_name": 12,
            "legs": 2.5,
            "cm_enabled": "yes",
            "turn_rate": null
        }));
        assert_eq!(hero.id, None);
        assert_eq!(hero.base_health, None);
        assert_eq!(hero.primary_attr, None);
        assert_eq!(hero.localized_name, None);
        assert_eq!(hero.legs, None);
        assert_eq!(hero.cm_enabled, None);
        assert_eq!(hero.turn_rate, None);

        assert_eq!(hero.extra.get("id"), Some(&json!(-4)));
        assert_eq!(hero.extra.get("baseHealth"), Some(&json!("lots")));
        assert_eq!(hero.extra.get("localizedName"), Some(&json!(12)));
        assert_eq!(hero.extra.get("legs"), Some(&json!(2.5)));
        assert_eq!(hero.extra.get("cmEnabled"), Some(&json!("yes")));
        // narrowed enums and nulls are not carried over
        assert_eq!(hero.extra.get("primaryAttr"), None);
        assert_eq!(hero.extra.get("turnRate"), None);

        let out = hero.to_json();
        assert_eq!(out["baseHealth"], json!("lots"));
        assert_eq!(out["legs"], json!(2.5));
    }

    #[test]
    fn test_from_json_whole_floats_for_integer_fields() {
        let hero = Hero::from_json(&json!({"id": 1.0, "legs": 2.0, "localized_name": "Axe"}));
        assert_eq!(hero.id, Some(1));
        assert_eq!(hero.legs, Some(2));
        assert!(hero.extra.is_empty());

        let heroes = crate::json::read_hero_stats(r#"[{"id": 1.0, "legs": 2.0}]"#).unwrap();
        assert_eq!(heroes[0].id, Some(1));
        assert_eq!(heroes[0].legs, Some(2));
    }

    #[test]
    fn test_from_json_id_out_of_range_is_kept() {
        let hero = Hero::from_json(&json!({"id": 4_294_967_296u64, "legs": 1e10}));
        assert_eq!(hero.id, None);
        assert_eq!(hero.legs, None);
        assert_eq!(hero.extra.get("id"), Some(&json!(4_294_967_296u64)));
        assert_eq!(hero.extra.get("legs"), Some(&json!(1e10)));
        assert_eq!(hero.to_json()["id"], json!(4_294_967_296u64));
    }

    #[test]
    fn test_from_json_non_object() {
        assert_eq!(Hero::from_json(&json!(null)), Hero::default());
        assert_eq!(Hero::from_json(&json!([1, 2])), Hero::default());
        assert_eq!(Hero::from_json(&json!("axe")), Hero::default());
    }

    #[test]
    fn test_from_json_accepts_camel_case_input() {
        let hero = Hero::from_json(&json!({"primaryAttr": "int", "baseMana": 75}));
        assert_eq!(hero.primary_attr, Some(HeroAttribute::Intelligence));
        assert_eq!(hero.base_mana, Some(75.0));
    }

    #[test]
    fn test_to_json() {
        let hero = Hero::from_json(&json!({
            "id": 2,
            "localized_name": "Axe",
            "primary_attr": "str",
            "attack_type": "Melee",
            "roles": ["Initiator", "Bogus"],
            "base_health": 120,
            "base_health_regen": 2.75,
            "pro_ban": 7
        }));
        let out = hero.to_json();
        assert_eq!(
            out,
            json!({
                "id": 2,
                "localizedName": "Axe",
                "primaryAttr": "str",
                "attackType": "Melee",
                "roles": ["Initiator", null],
                "baseHealth": 120,
                "baseHealthRegen": 2.75,
                "proBan": 7
            })
        );
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys.last().map(|k| k.as_str()), Some("proBan"));
    }

    #[test]
    fn test_to_json_then_from_json_keeps_record() {
        let hero = Hero::from_json(&anti_mage());
        assert_eq!(Hero::from_json(&hero.to_json()), hero);
    }

    #[test]
    fn test_to_json_default_hero() {
        assert_eq!(Hero::default().to_json(), json!({"roles": []}));
    }

    #[test]
    fn test_enum_tokens() {
        for attr in HeroAttribute::ALL {
            assert_eq!(HeroAttribute::from_wire(attr.wire_token()), Some(attr));
            assert_eq!(attr.to_string(), attr.wire_token());
        }
        for role in HeroRole::ALL {
            assert_eq!(role.wire_token().parse::<HeroRole>().unwrap(), role);
        }
        assert_eq!(AttackType::from_wire("Ranged"), Some(AttackType::Ranged));
        assert_eq!(AttackType::from_wire("RANGED"), None);
        assert_eq!(HeroAttribute::from_wire(""), None);
        assert_eq!(HeroAttribute::from_wire("st"), None);
        assert!(matches!(
            "bogus".parse::<HeroAttribute>(),
            Err(HeroError::UnknownToken { kind: "attribute", .. })
        ));
    }

    #[test]
    fn test_display_name() {
        let mut hero = Hero::default();
        assert_eq!(hero.display_name(), "");
        hero.name = Some("npc_dota_hero_axe".to_string());
        assert_eq!(hero.display_name(), "npc_dota_hero_axe");
        hero.localized_name = Some("Axe".to_string());
        assert_eq!(hero.display_name(), "Axe");
    }
}
