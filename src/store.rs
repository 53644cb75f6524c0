use std::collections::HashMap;

use chrono::Utc;
use log::debug;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{
    Building, BuildingId, BuildingUpdate, Course, CourseId, CourseUpdate, DemandId, Room, RoomId,
    RoomType, RoomTypeUpdate, RoomUpdate, Schedule, ScheduleId, ScheduleUpdate, SessionDemand,
    SessionDemandUpdate, ValidationError,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// In-memory record store standing in for the persistence layer.
///
/// Each entity lives in its own lock so unrelated resources do not
/// contend. Referential rules mirror the storage schema: rooms point at
/// existing buildings and room types, demands at existing courses, and
/// deleting a course removes its demands.
#[derive(Default)]
pub struct Store {
    buildings: RwLock<HashMap<BuildingId, Building>>,
    room_types: RwLock<HashMap<String, RoomType>>,
    rooms: RwLock<HashMap<RoomId, Room>>,
    courses: RwLock<HashMap<CourseId, Course>>,
    demands: RwLock<HashMap<DemandId, SessionDemand>>,
    schedules: RwLock<HashMap<ScheduleId, Schedule>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- buildings ----

    pub async fn create_building(&self, building: Building) -> Result<Building, StoreError> {
        building.validate()?;
        self.buildings
            .write()
            .await
            .insert(building.id, building.clone());
        debug!("created building {}", building.id);
        Ok(building)
    }

    pub async fn get_building(&self, id: BuildingId) -> Result<Building, StoreError> {
        self.buildings
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("building"))
    }

    pub async fn list_buildings(&self) -> Vec<Building> {
        let mut buildings: Vec<Building> = self.buildings.read().await.values().cloned().collect();
        buildings.sort_by(|a, b| a.name.cmp(&b.name));
        buildings
    }

    pub async fn update_building(
        &self,
        id: BuildingId,
        updates: BuildingUpdate,
    ) -> Result<Building, StoreError> {
        updates.validate()?;
        let mut buildings = self.buildings.write().await;
        let building = buildings
            .get_mut(&id)
            .ok_or(StoreError::NotFound("building"))?;

        if let Some(name) = updates.name {
            building.name = name;
        }

        Ok(building.clone())
    }

    pub async fn delete_building(&self, id: BuildingId) -> Result<(), StoreError> {
        self.buildings
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("building"))
    }

    // ---- room types ----

    pub async fn create_room_type(&self, room_type: RoomType) -> Result<RoomType, StoreError> {
        room_type.validate()?;
        let mut room_types = self.room_types.write().await;
        if room_types.contains_key(&room_type.name) {
            return Err(StoreError::Conflict(format!(
                "room type {} already exists",
                room_type.name
            )));
        }
        room_types.insert(room_type.name.clone(), room_type.clone());
        Ok(room_type)
    }

    pub async fn get_room_type(&self, name: &str) -> Result<RoomType, StoreError> {
        self.room_types
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or(StoreError::NotFound("room type"))
    }

    pub async fn list_room_types(&self) -> Vec<RoomType> {
        let mut room_types: Vec<RoomType> =
            self.room_types.read().await.values().cloned().collect();
        room_types.sort_by(|a, b| a.name.cmp(&b.name));
        room_types
    }

    pub async fn update_room_type(
        &self,
        name: &str,
        updates: RoomTypeUpdate,
    ) -> Result<RoomType, StoreError> {
        let mut room_types = self.room_types.write().await;
        let room_type = room_types
            .get_mut(name)
            .ok_or(StoreError::NotFound("room type"))?;

        if let Some(description) = updates.description {
            room_type.description = description;
        }

        Ok(room_type.clone())
    }

    pub async fn delete_room_type(&self, name: &str) -> Result<(), StoreError> {
        self.room_types
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or(StoreError::NotFound("room type"))
    }

    // ---- rooms ----

    pub async fn create_room(&self, mut room: Room) -> Result<Room, StoreError> {
        room.validate()?;
        self.require_building(room.building_id).await?;
        self.require_room_type(&room.room_type).await?;

        let now = Utc::now();
        room.created_at = Some(now);
        room.updated_at = Some(now);
        self.rooms.write().await.insert(room.id, room.clone());
        debug!("created room {} ({})", room.id, room.room_type);
        Ok(room)
    }

    pub async fn get_room(&self, id: RoomId) -> Result<Room, StoreError> {
        self.rooms
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("room"))
    }

    pub async fn list_rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.read().await.values().cloned().collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        rooms
    }

    pub async fn update_room(&self, id: RoomId, updates: RoomUpdate) -> Result<Room, StoreError> {
        updates.validate()?;
        if let Some(building_id) = updates.building_id {
            self.require_building(building_id).await?;
        }
        if let Some(room_type) = &updates.room_type {
            self.require_room_type(room_type).await?;
        }

        let mut rooms = self.rooms.write().await;
        let room = rooms.get_mut(&id).ok_or(StoreError::NotFound("room"))?;

        if let Some(name) = updates.name {
            room.name = name;
        }
        if let Some(room_type) = updates.room_type {
            room.room_type = room_type;
        }
        if let Some(building_id) = updates.building_id {
            room.building_id = building_id;
        }
        if let Some(capacity) = updates.capacity {
            room.capacity = capacity;
        }
        room.updated_at = Some(Utc::now());

        Ok(room.clone())
    }

    pub async fn delete_room(&self, id: RoomId) -> Result<(), StoreError> {
        self.rooms
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("room"))
    }

    // ---- courses ----

    pub async fn create_course(&self, mut course: Course) -> Result<Course, StoreError> {
        course.validate()?;
        let now = Utc::now();
        course.created_at = Some(now);
        course.updated_at = Some(now);
        self.courses.write().await.insert(course.id, course.clone());
        Ok(course)
    }

    pub async fn get_course(&self, id: CourseId) -> Result<Course, StoreError> {
        self.courses
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("course"))
    }

    pub async fn list_courses(&self) -> Vec<Course> {
        let mut courses: Vec<Course> = self.courses.read().await.values().cloned().collect();
        courses.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        courses
    }

    pub async fn update_course(
        &self,
        id: CourseId,
        updates: CourseUpdate,
    ) -> Result<Course, StoreError> {
        updates.validate()?;
        let mut courses = self.courses.write().await;
        let course = courses.get_mut(&id).ok_or(StoreError::NotFound("course"))?;

        if let Some(name) = updates.name {
            course.name = name;
        }
        course.updated_at = Some(Utc::now());

        Ok(course.clone())
    }

    /// Deletes a course and every demand that references it.
    pub async fn delete_course(&self, id: CourseId) -> Result<(), StoreError> {
        self.courses
            .write()
            .await
            .remove(&id)
            .ok_or(StoreError::NotFound("course"))?;
        self.demands.write().await.retain(|_, d| d.course_id != id);
        Ok(())
    }

    // ---- session demands ----

    pub async fn create_demand(
        &self,
        mut demand: SessionDemand,
    ) -> Result<SessionDemand, StoreError> {
        demand.validate()?;
        self.get_course(demand.course_id).await?;

        let now = Utc::now();
        demand.created_at = Some(now);
        demand.updated_at = Some(now);
        self.demands.write().await.insert(demand.id, demand.clone());
        Ok(demand)
    }

    pub async fn get_demand(&self, id: DemandId) -> Result<SessionDemand, StoreError> {
        self.demands
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("session demand"))
    }

    pub async fn list_demands(&self) -> Vec<SessionDemand> {
        let mut demands: Vec<SessionDemand> = self.demands.read().await.values().cloned().collect();
        demands.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        demands
    }

    pub async fn list_demands_for_course(&self, course_id: CourseId) -> Vec<SessionDemand> {
        let mut demands: Vec<SessionDemand> = self
            .demands
            .read()
            .await
            .values()
            .filter(|d| d.course_id == course_id)
            .cloned()
            .collect();
        demands.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        demands
    }

    pub async fn update_demand(
        &self,
        id: DemandId,
        updates: SessionDemandUpdate,
    ) -> Result<SessionDemand, StoreError> {
        updates.validate()?;
        let mut demands = self.demands.write().await;
        let demand = demands
            .get_mut(&id)
            .ok_or(StoreError::NotFound("session demand"))?;

        if let Some(session_type) = updates.session_type {
            demand.session_type = session_type;
        }
        if let Some(required_room) = updates.required_room {
            demand.required_room = required_room;
        }
        if let Some(duration) = updates.duration {
            demand.duration = duration;
        }
        if let Some(sessions_per_week) = updates.sessions_per_week {
            demand.sessions_per_week = sessions_per_week;
        }
        demand.updated_at = Some(Utc::now());

        Ok(demand.clone())
    }

    pub async fn delete_demand(&self, id: DemandId) -> Result<(), StoreError> {
        self.demands
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("session demand"))
    }

    // ---- schedules ----

    pub async fn create_schedule(&self, mut schedule: Schedule) -> Result<Schedule, StoreError> {
        schedule.validate()?;
        let mut schedules = self.schedules.write().await;
        if schedules.values().any(|s| s.name == schedule.name) {
            return Err(StoreError::Conflict(format!(
                "schedule {} already exists",
                schedule.name
            )));
        }

        schedule.created_at = Some(Utc::now());
        schedules.insert(schedule.id, schedule.clone());
        debug!(
            "saved schedule {} with {} sessions",
            schedule.id,
            schedule.sessions.len()
        );
        Ok(schedule)
    }

    pub async fn get_schedule(&self, id: ScheduleId) -> Result<Schedule, StoreError> {
        self.schedules
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("schedule"))
    }

    pub async fn get_schedule_by_name(&self, name: &str) -> Result<Schedule, StoreError> {
        self.schedules
            .read()
            .await
            .values()
            .find(|s| s.name == name)
            .cloned()
            .ok_or(StoreError::NotFound("schedule"))
    }

    pub async fn list_schedules(&self) -> Vec<Schedule> {
        let mut schedules: Vec<Schedule> = self.schedules.read().await.values().cloned().collect();
        schedules.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        schedules
    }

    pub async fn update_schedule(
        &self,
        id: ScheduleId,
        updates: ScheduleUpdate,
    ) -> Result<Schedule, StoreError> {
        updates.validate()?;
        let mut schedules = self.schedules.write().await;

        if let Some(name) = &updates.name {
            if schedules.values().any(|s| s.id != id && &s.name == name) {
                return Err(StoreError::Conflict(format!(
                    "schedule {name} already exists"
                )));
            }
        }

        let schedule = schedules
            .get_mut(&id)
            .ok_or(StoreError::NotFound("schedule"))?;

        if let Some(name) = updates.name {
            schedule.name = name;
        }
        if let Some(sessions) = updates.sessions {
            schedule.sessions = sessions;
        }

        Ok(schedule.clone())
    }

    pub async fn delete_schedule(&self, id: ScheduleId) -> Result<(), StoreError> {
        self.schedules
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("schedule"))
    }

    // ---- referential checks ----

    async fn require_building(&self, id: BuildingId) -> Result<(), StoreError> {
        if self.buildings.read().await.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::NotFound("building"))
        }
    }

    async fn require_room_type(&self, name: &str) -> Result<(), StoreError> {
        if self.room_types.read().await.contains_key(name) {
            Ok(())
        } else {
            Err(StoreError::NotFound("room type"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduledSession;
    use uuid::Uuid;

    async fn seeded_store() -> (Store, Building, RoomType) {
        let store = Store::new();
        let building = store
            .create_building(Building {
                id: Uuid::new_v4(),
                name: "Science Block".to_string(),
            })
            .await
            .unwrap();
        let room_type = store
            .create_room_type(RoomType {
                name: "lecture_room".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        (store, building, room_type)
    }

    fn make_room(building_id: BuildingId) -> Room {
        Room {
            id: Uuid::new_v4(),
            name: "Room 101".to_string(),
            room_type: "lecture_room".to_string(),
            building_id,
            capacity: 30,
            created_at: None,
            updated_at: None,
        }
    }

    fn make_course(name: &str) -> Course {
        Course {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn room_crud_round_trip() {
        let (store, building, _) = seeded_store().await;
        let room = store.create_room(make_room(building.id)).await.unwrap();
        assert!(room.created_at.is_some());

        let fetched = store.get_room(room.id).await.unwrap();
        assert_eq!(fetched.name, "Room 101");

        let updated = store
            .update_room(
                room.id,
                RoomUpdate {
                    capacity: Some(50),
                    ..RoomUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.capacity, 50);

        store.delete_room(room.id).await.unwrap();
        assert!(matches!(
            store.get_room(room.id).await,
            Err(StoreError::NotFound("room"))
        ));
    }

    #[tokio::test]
    async fn room_requires_existing_building_and_type() {
        let (store, building, _) = seeded_store().await;

        let mut orphan = make_room(Uuid::new_v4());
        orphan.name = "Orphan".to_string();
        assert!(matches!(
            store.create_room(orphan).await,
            Err(StoreError::NotFound("building"))
        ));

        let mut untyped = make_room(building.id);
        untyped.room_type = "holodeck".to_string();
        assert!(matches!(
            store.create_room(untyped).await,
            Err(StoreError::NotFound("room type"))
        ));
    }

    #[tokio::test]
    async fn deleting_course_cascades_to_demands() {
        let store = Store::new();
        let course = store.create_course(make_course("Math 101")).await.unwrap();
        store
            .create_demand(SessionDemand {
                id: Uuid::new_v4(),
                course_id: course.id,
                session_type: "lecture".to_string(),
                required_room: "lecture_room".to_string(),
                duration: 60,
                sessions_per_week: 2,
                created_at: None,
                updated_at: None,
            })
            .await
            .unwrap();
        assert_eq!(store.list_demands_for_course(course.id).await.len(), 1);

        store.delete_course(course.id).await.unwrap();
        assert!(store.list_demands().await.is_empty());
    }

    #[tokio::test]
    async fn demand_requires_existing_course() {
        let store = Store::new();
        let result = store
            .create_demand(SessionDemand {
                id: Uuid::new_v4(),
                course_id: Uuid::new_v4(),
                session_type: "lecture".to_string(),
                required_room: "lecture_room".to_string(),
                duration: 60,
                sessions_per_week: 1,
                created_at: None,
                updated_at: None,
            })
            .await;
        assert!(matches!(result, Err(StoreError::NotFound("course"))));
    }

    #[tokio::test]
    async fn duplicate_schedule_name_conflicts() {
        let store = Store::new();
        let session = ScheduledSession {
            course_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            day: 0,
            start_time: 480,
            end_time: 540,
        };
        store
            .create_schedule(Schedule {
                id: Uuid::new_v4(),
                name: "Fall".to_string(),
                sessions: vec![session],
                created_at: None,
            })
            .await
            .unwrap();

        let duplicate = store
            .create_schedule(Schedule {
                id: Uuid::new_v4(),
                name: "Fall".to_string(),
                sessions: vec![session],
                created_at: None,
            })
            .await;
        assert!(matches!(duplicate, Err(StoreError::Conflict(_))));

        let by_name = store.get_schedule_by_name("Fall").await.unwrap();
        assert_eq!(by_name.sessions.len(), 1);
    }

    #[tokio::test]
    async fn empty_schedule_fails_validation() {
        let store = Store::new();
        let result = store
            .create_schedule(Schedule {
                id: Uuid::new_v4(),
                name: "Empty".to_string(),
                sessions: vec![],
                created_at: None,
            })
            .await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn lists_are_sorted_by_name() {
        let store = Store::new();
        store.create_course(make_course("Zoology")).await.unwrap();
        store.create_course(make_course("Algebra")).await.unwrap();

        let names: Vec<String> = store
            .list_courses()
            .await
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Algebra", "Zoology"]);
    }
}
