//! 车辆表单状态管理
//!
//! 新增与编辑共用同一个对话框：`editing_id` 为 `None` 时是新增，
//! 否则是编辑，转换出的请求对象也不同。

use fleetdesk_shared::Vehicle;
use fleetdesk_shared::protocol::{CreateVehicleRequest, UpdateVehicleRequest};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct VehicleFormState {
    /// 编辑中的车辆 id；`None` 表示新增
    pub editing_id: RwSignal<Option<String>>,
    pub year: RwSignal<String>,
    pub make: RwSignal<String>,
    pub model: RwSignal<String>,
    pub vin: RwSignal<String>,
    pub license_plate: RwSignal<String>,
    pub tire_size: RwSignal<String>,
    pub note: RwSignal<String>,
}

impl VehicleFormState {
    pub fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            year: RwSignal::new(String::new()),
            make: RwSignal::new(String::new()),
            model: RwSignal::new(String::new()),
            vin: RwSignal::new(String::new()),
            license_plate: RwSignal::new(String::new()),
            tire_size: RwSignal::new(String::new()),
            note: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.editing_id.set(None);
        self.year.set(String::new());
        self.make.set(String::new());
        self.model.set(String::new());
        self.vin.set(String::new());
        self.license_plate.set(String::new());
        self.tire_size.set(String::new());
        self.note.set(String::new());
    }

    /// 用一辆已有车辆填充表单（进入编辑模式）
    pub fn load(&self, vehicle: &Vehicle) {
        self.editing_id.set(Some(vehicle.id.clone()));
        self.year.set(vehicle.year.clone());
        self.make.set(vehicle.make.clone());
        self.model.set(vehicle.model.clone());
        self.vin.set(vehicle.vin.clone());
        self.license_plate.set(vehicle.license_plate.clone());
        self.tire_size.set(vehicle.tire_size.clone());
        self.note.set(vehicle.note.clone().unwrap_or_default());
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.with(|id| id.is_some())
    }

    pub fn to_create_request(&self) -> CreateVehicleRequest {
        let note = self.note.get();
        CreateVehicleRequest {
            year: self.year.get(),
            make: self.make.get(),
            model: self.model.get(),
            vin: self.vin.get(),
            license_plate: self.license_plate.get(),
            tire_size: self.tire_size.get(),
            note: if note.trim().is_empty() {
                None
            } else {
                Some(note)
            },
        }
    }

    /// 编辑模式下的 PATCH 请求；所有字段整体提交
    pub fn to_update_request(&self, id: String) -> UpdateVehicleRequest {
        let note = self.note.get();
        UpdateVehicleRequest {
            id,
            year: Some(self.year.get()),
            make: Some(self.make.get()),
            model: Some(self.model.get()),
            vin: Some(self.vin.get()),
            license_plate: Some(self.license_plate.get()),
            tire_size: Some(self.tire_size.get()),
            note: if note.trim().is_empty() {
                None
            } else {
                Some(note)
            },
        }
    }
}

impl Default for VehicleFormState {
    fn default() -> Self {
        Self::new()
    }
}
