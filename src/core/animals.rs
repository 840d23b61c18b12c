use crate::core::service::ZooQueryService;
use crate::core::views::{AnimalCount, AnimalMap, LocationEntry, OrderedMap};
use crate::domain::model::{AnimalGroup, Location, Resident, Sex};
use crate::utils::error::{Entity, Result, ZooError};

/// animal_map 的選項
///
/// `sex` 與 `sorted` 只在 `include_names` 為 true 時生效。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimalMapOptions {
    pub include_names: bool,
    pub sex: Option<Sex>,
    pub sorted: bool,
}

/// 年齡最大的 resident，同齡時取第一個
pub fn oldest_resident(residents: &[Resident]) -> Option<&Resident> {
    residents
        .iter()
        .reduce(|oldest, current| if current.age > oldest.age { current } else { oldest })
}

impl ZooQueryService {
    pub(crate) fn find_group_by_name(&self, species: &str) -> Result<&AnimalGroup> {
        self.store
            .group_by_name(species)
            .ok_or_else(|| ZooError::not_found(Entity::Species, species))
    }

    pub(crate) fn find_group_by_id(&self, id: &str) -> Result<&AnimalGroup> {
        self.store.group_by_id(id).ok_or_else(|| {
            tracing::warn!("Dangling animal group reference: {}", id);
            ZooError::not_found(Entity::AnimalGroup, id)
        })
    }

    /// 依 id 找出群組，保留資料原本的順序
    pub fn animals_by_ids(&self, ids: &[&str]) -> Vec<&AnimalGroup> {
        self.store
            .animals
            .iter()
            .filter(|group| ids.contains(&group.id.as_str()))
            .collect()
    }

    /// 該物種所有 resident 的年齡是否都 >= age
    pub fn animals_older_than(&self, species: &str, age: u32) -> Result<bool> {
        let group = self.find_group_by_name(species)?;
        tracing::debug!(
            "Checking {} residents of {} against age {}",
            group.residents.len(),
            species,
            age
        );
        Ok(group.residents.iter().all(|resident| resident.age >= age))
    }

    pub fn animal_count(&self, species: Option<&str>) -> Result<AnimalCount> {
        match species {
            Some(species) => {
                let group = self.find_group_by_name(species)?;
                Ok(AnimalCount::Species(group.residents.len()))
            }
            None => {
                let counts: OrderedMap<usize> = self
                    .store
                    .animals
                    .iter()
                    .map(|group| (group.name.clone(), group.residents.len()))
                    .collect();
                Ok(AnimalCount::All(counts))
            }
        }
    }

    /// 每個分區列出物種，或（include_names）列出各物種的 resident 名字
    pub fn animal_map(&self, options: AnimalMapOptions) -> AnimalMap {
        Location::ALL
            .iter()
            .map(|&location| {
                let entries = self
                    .store
                    .animals
                    .iter()
                    .filter(|group| group.location == location)
                    .map(|group| {
                        if options.include_names {
                            LocationEntry::Residents {
                                species: group.name.clone(),
                                names: resident_names(group, &options),
                            }
                        } else {
                            LocationEntry::Species(group.name.clone())
                        }
                    })
                    .collect();
                (location, entries)
            })
            .collect()
    }

    pub fn get_older_animal_from_species<'a>(
        &self,
        residents: &'a [Resident],
    ) -> Result<&'a Resident> {
        oldest_resident(residents).ok_or(ZooError::EmptyResidents)
    }
}

fn resident_names(group: &AnimalGroup, options: &AnimalMapOptions) -> Vec<String> {
    let mut names: Vec<String> = group
        .residents
        .iter()
        .filter(|resident| match options.sex {
            Some(sex) => resident.sex == Some(sex),
            None => true,
        })
        .map(|resident| resident.name.clone())
        .collect();
    if options.sorted {
        names.sort();
    }
    names
}
